use crate::domain::{models::corporate_booking::CorporateBooking, ports::CorporateBookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresCorporateRepo {
    pool: PgPool,
}

impl PostgresCorporateRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CorporateBookingRepository for PostgresCorporateRepo {
    async fn create(&self, booking: &CorporateBooking) -> Result<CorporateBooking, AppError> {
        sqlx::query_as::<_, CorporateBooking>(
            "INSERT INTO corporate_bookings (id, company_name, contact_name, contact_email, contact_phone,
                team_size, preferred_date, time_slot, duration, estimated_cents, message, status,
                created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.company_name)
            .bind(&booking.contact_name).bind(&booking.contact_email).bind(&booking.contact_phone)
            .bind(&booking.team_size).bind(booking.preferred_date)
            .bind(&booking.time_slot).bind(&booking.duration)
            .bind(booking.estimated_cents).bind(&booking.message).bind(&booking.status)
            .bind(booking.created_at).bind(booking.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CorporateBooking>, AppError> {
        sqlx::query_as::<_, CorporateBooking>("SELECT * FROM corporate_bookings WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, status: Option<&str>, limit: i64, offset: i64) -> Result<Vec<CorporateBooking>, AppError> {
        if let Some(status) = status {
            sqlx::query_as::<_, CorporateBooking>(
                "SELECT * FROM corporate_bookings WHERE status = $1 ORDER BY preferred_date ASC LIMIT $2 OFFSET $3"
            )
                .bind(status).bind(limit).bind(offset)
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        } else {
            sqlx::query_as::<_, CorporateBooking>(
                "SELECT * FROM corporate_bookings ORDER BY preferred_date ASC LIMIT $1 OFFSET $2"
            )
                .bind(limit).bind(offset)
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        }
    }

    async fn count(&self, status: Option<&str>) -> Result<i64, AppError> {
        if let Some(status) = status {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM corporate_bookings WHERE status = $1")
                .bind(status).fetch_one(&self.pool).await.map_err(AppError::Database)
        } else {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM corporate_bookings")
                .fetch_one(&self.pool).await.map_err(AppError::Database)
        }
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<CorporateBooking, AppError> {
        sqlx::query_as::<_, CorporateBooking>(
            "UPDATE corporate_bookings SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *"
        )
            .bind(status).bind(Utc::now()).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Corporate booking not found".into()))
    }
}
