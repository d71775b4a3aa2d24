use crate::domain::{models::booking::Booking, ports::{BookingFilter, BookingRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &BookingFilter) {
    if let Some(ref status) = filter.status {
        qb.push(" AND status = ").push_bind(status.clone());
    }
    if let Some(date_from) = filter.date_from {
        qb.push(" AND date >= ").push_bind(date_from);
    }
    if let Some(date_to) = filter.date_to {
        qb.push(" AND date <= ").push_bind(date_to);
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, reference, customer_name, customer_email, customer_phone,
                package_id, package_name, date, time_slot, participants, total_cents,
                special_requests, status, payment_status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.reference)
            .bind(&booking.customer_name).bind(&booking.customer_email).bind(&booking.customer_phone)
            .bind(&booking.package_id).bind(&booking.package_name)
            .bind(booking.date).bind(&booking.time_slot)
            .bind(booking.participants).bind(booking.total_cents)
            .bind(&booking.special_requests).bind(&booking.status).bind(&booking.payment_status)
            .bind(booking.created_at).bind(booking.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filter: &BookingFilter, limit: i64, offset: i64) -> Result<Vec<Booking>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM bookings WHERE 1=1");
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY date ASC, time_slot ASC LIMIT ").push_bind(limit);
        qb.push(" OFFSET ").push_bind(offset);
        qb.build_query_as::<Booking>()
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn count(&self, filter: &BookingFilter) -> Result<i64, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM bookings WHERE 1=1");
        push_filter(&mut qb, filter);
        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn slot_taken(&self, date: NaiveDate, time_slot: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE date = $1 AND time_slot = $2 AND status != 'cancelled'"
        )
            .bind(date).bind(time_slot)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET customer_name=$1, customer_email=$2, customer_phone=$3,
                date=$4, time_slot=$5, participants=$6, total_cents=$7, special_requests=$8,
                status=$9, payment_status=$10, updated_at=$11
             WHERE id=$12
             RETURNING *"
        )
            .bind(&booking.customer_name).bind(&booking.customer_email).bind(&booking.customer_phone)
            .bind(booking.date).bind(&booking.time_slot)
            .bind(booking.participants).bind(booking.total_cents).bind(&booking.special_requests)
            .bind(&booking.status).bind(&booking.payment_status).bind(Utc::now())
            .bind(&booking.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
