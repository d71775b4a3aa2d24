use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgConnectOptions, PgPoolOptions}, sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tera::Tera;
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::notifications::Notifier;
use crate::infra::email::http_email_service::HttpEmailService;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_contact_repo::PostgresContactRepo,
    postgres_corporate_repo::PostgresCorporateRepo, postgres_newsletter_repo::PostgresNewsletterRepo,
    postgres_package_repo::PostgresPackageRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_contact_repo::SqliteContactRepo,
    sqlite_corporate_repo::SqliteCorporateRepo, sqlite_newsletter_repo::SqliteNewsletterRepo,
    sqlite_package_repo::SqlitePackageRepo,
};
use crate::state::AppState;

pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_template(
        "booking_confirmation.html",
        include_str!("../templates/booking_confirmation.html"),
    )
    .expect("Failed to load booking confirmation template");
    tera.add_raw_template(
        "contact_ack.html",
        include_str!("../templates/contact_ack.html"),
    )
    .expect("Failed to load contact acknowledgement template");
    tera
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let email_service = Arc::new(HttpEmailService::new(
        config.mail_service_url.clone(),
        config.mail_service_token.clone(),
    ));

    let templates = Arc::new(load_templates());

    let notifier = Arc::new(Notifier::new(
        email_service.clone(),
        templates.clone(),
        config.notify_email.clone(),
        config.frontend_url.clone(),
    ));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            package_repo: Arc::new(PostgresPackageRepo::new(pool.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            corporate_repo: Arc::new(PostgresCorporateRepo::new(pool.clone())),
            contact_repo: Arc::new(PostgresContactRepo::new(pool.clone())),
            newsletter_repo: Arc::new(PostgresNewsletterRepo::new(pool.clone())),
            email_service,
            notifier,
            templates,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            package_repo: Arc::new(SqlitePackageRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            corporate_repo: Arc::new(SqliteCorporateRepo::new(pool.clone())),
            contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
            newsletter_repo: Arc::new(SqliteNewsletterRepo::new(pool.clone())),
            email_service,
            notifier,
            templates,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
