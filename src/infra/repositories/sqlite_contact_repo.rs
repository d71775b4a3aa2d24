use crate::domain::{models::contact::Contact, ports::{ContactFilter, ContactRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteContactRepo {
    pool: SqlitePool,
}

impl SqliteContactRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &ContactFilter) {
    if let Some(ref status) = filter.status {
        qb.push(" AND status = ").push_bind(status.clone());
    }
    if let Some(ref category) = filter.category {
        qb.push(" AND category = ").push_bind(category.clone());
    }
    if let Some(ref priority) = filter.priority {
        qb.push(" AND priority = ").push_bind(priority.clone());
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepo {
    async fn create(&self, contact: &Contact) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (id, name, email, phone, subject, message, category, priority,
                status, response, responded_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&contact.id).bind(&contact.name).bind(&contact.email).bind(&contact.phone)
            .bind(&contact.subject).bind(&contact.message)
            .bind(&contact.category).bind(&contact.priority).bind(&contact.status)
            .bind(&contact.response).bind(contact.responded_at)
            .bind(contact.created_at).bind(contact.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, AppError> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filter: &ContactFilter, limit: i64, offset: i64) -> Result<Vec<Contact>, AppError> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT * FROM contacts WHERE 1=1");
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY created_at DESC LIMIT ").push_bind(limit);
        qb.push(" OFFSET ").push_bind(offset);
        qb.build_query_as::<Contact>()
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn count(&self, filter: &ContactFilter) -> Result<i64, AppError> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM contacts WHERE 1=1");
        push_filter(&mut qb, filter);
        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, contact: &Contact) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            "UPDATE contacts SET status=?, priority=?, response=?, responded_at=?, updated_at=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&contact.status).bind(&contact.priority)
            .bind(&contact.response).bind(contact.responded_at).bind(Utc::now())
            .bind(&contact.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
