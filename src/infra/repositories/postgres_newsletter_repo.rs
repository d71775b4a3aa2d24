use crate::domain::{models::newsletter::Subscriber, ports::NewsletterRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresNewsletterRepo {
    pool: PgPool,
}

impl PostgresNewsletterRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepo {
    async fn create(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError> {
        sqlx::query_as::<_, Subscriber>(
            "INSERT INTO subscribers (id, email, status, source, interests,
                emails_sent, emails_opened, emails_clicked,
                subscribed_at, unsubscribed_at, unsubscribe_reason, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING *"
        )
            .bind(&subscriber.id).bind(&subscriber.email)
            .bind(&subscriber.status).bind(&subscriber.source).bind(&subscriber.interests)
            .bind(subscriber.emails_sent).bind(subscriber.emails_opened).bind(subscriber.emails_clicked)
            .bind(subscriber.subscribed_at).bind(subscriber.unsubscribed_at)
            .bind(&subscriber.unsubscribe_reason)
            .bind(subscriber.created_at).bind(subscriber.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, AppError> {
        sqlx::query_as::<_, Subscriber>("SELECT * FROM subscribers WHERE email = $1")
            .bind(email).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, status: Option<&str>, limit: i64, offset: i64) -> Result<Vec<Subscriber>, AppError> {
        if let Some(status) = status {
            sqlx::query_as::<_, Subscriber>(
                "SELECT * FROM subscribers WHERE status = $1 ORDER BY subscribed_at DESC LIMIT $2 OFFSET $3"
            )
                .bind(status).bind(limit).bind(offset)
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        } else {
            sqlx::query_as::<_, Subscriber>(
                "SELECT * FROM subscribers ORDER BY subscribed_at DESC LIMIT $1 OFFSET $2"
            )
                .bind(limit).bind(offset)
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        }
    }

    async fn count(&self, status: Option<&str>) -> Result<i64, AppError> {
        if let Some(status) = status {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subscribers WHERE status = $1")
                .bind(status).fetch_one(&self.pool).await.map_err(AppError::Database)
        } else {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subscribers")
                .fetch_one(&self.pool).await.map_err(AppError::Database)
        }
    }

    async fn update(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError> {
        sqlx::query_as::<_, Subscriber>(
            "UPDATE subscribers SET status=$1, source=$2, interests=$3,
                subscribed_at=$4, unsubscribed_at=$5, unsubscribe_reason=$6, updated_at=$7
             WHERE id=$8
             RETURNING *"
        )
            .bind(&subscriber.status).bind(&subscriber.source).bind(&subscriber.interests)
            .bind(subscriber.subscribed_at).bind(subscriber.unsubscribed_at)
            .bind(&subscriber.unsubscribe_reason).bind(Utc::now())
            .bind(&subscriber.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
