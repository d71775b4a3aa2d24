use smashlabs_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::EmailService,
    domain::services::notifications::Notifier,
    error::AppError,
    infra::factory::load_templates,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_contact_repo::SqliteContactRepo,
        sqlite_corporate_repo::SqliteCorporateRepo,
        sqlite_newsletter_repo::SqliteNewsletterRepo,
        sqlite_package_repo::SqlitePackageRepo,
    },
    state::AppState,
};

use async_trait::async_trait;
use axum::Router;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

pub struct MockEmailService;

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(&self, _recipient: &str, _subject: &str, _html_body: &str) -> Result<(), AppError> {
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            frontend_url: "http://localhost:3001".to_string(),
            notify_email: "studio@test.local".to_string(),
        };

        let email_service = Arc::new(MockEmailService);
        let templates = Arc::new(load_templates());
        let notifier = Arc::new(Notifier::new(
            email_service.clone(),
            templates.clone(),
            config.notify_email.clone(),
            config.frontend_url.clone(),
        ));

        let state = Arc::new(AppState {
            config,
            package_repo: Arc::new(SqlitePackageRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            corporate_repo: Arc::new(SqliteCorporateRepo::new(pool.clone())),
            contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
            newsletter_repo: Arc::new(SqliteNewsletterRepo::new(pool.clone())),
            email_service,
            notifier,
            templates,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
