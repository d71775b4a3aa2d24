use crate::domain::{models::package::Package, ports::PackageRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqlitePackageRepo {
    pool: SqlitePool,
}

impl SqlitePackageRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackageRepository for SqlitePackageRepo {
    async fn create(&self, package: &Package) -> Result<Package, AppError> {
        sqlx::query_as::<_, Package>(
            "INSERT INTO packages (id, name, slug, description, price_cents, duration_min, capacity_min, capacity_max,
                corporate_discount_pct, group_discount_pct, group_min_participants, seasonal_discount_pct,
                seasonal_start, seasonal_end, available_from, available_until,
                is_active, times_booked, revenue_cents, created_at, updated_at, deactivated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&package.id).bind(&package.name).bind(&package.slug).bind(&package.description)
            .bind(package.price_cents).bind(package.duration_min).bind(package.capacity_min).bind(package.capacity_max)
            .bind(package.corporate_discount_pct).bind(package.group_discount_pct)
            .bind(package.group_min_participants).bind(package.seasonal_discount_pct)
            .bind(package.seasonal_start).bind(package.seasonal_end)
            .bind(package.available_from).bind(package.available_until)
            .bind(package.is_active).bind(package.times_booked).bind(package.revenue_cents)
            .bind(package.created_at).bind(package.updated_at).bind(package.deactivated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Package>, AppError> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Package>, AppError> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE name = ?")
            .bind(name).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, active_only: bool, limit: i64, offset: i64) -> Result<Vec<Package>, AppError> {
        if active_only {
            sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE is_active = TRUE ORDER BY price_cents ASC LIMIT ? OFFSET ?")
                .bind(limit).bind(offset).fetch_all(&self.pool).await.map_err(AppError::Database)
        } else {
            sqlx::query_as::<_, Package>("SELECT * FROM packages ORDER BY price_cents ASC LIMIT ? OFFSET ?")
                .bind(limit).bind(offset).fetch_all(&self.pool).await.map_err(AppError::Database)
        }
    }

    async fn count(&self, active_only: bool) -> Result<i64, AppError> {
        let query = if active_only {
            "SELECT COUNT(*) FROM packages WHERE is_active = TRUE"
        } else {
            "SELECT COUNT(*) FROM packages"
        };
        sqlx::query_scalar::<_, i64>(query)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, package: &Package) -> Result<Package, AppError> {
        sqlx::query_as::<_, Package>(
            "UPDATE packages SET name=?, slug=?, description=?, price_cents=?, duration_min=?,
                capacity_min=?, capacity_max=?, corporate_discount_pct=?, group_discount_pct=?,
                group_min_participants=?, seasonal_discount_pct=?, seasonal_start=?, seasonal_end=?,
                available_from=?, available_until=?, updated_at=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&package.name).bind(&package.slug).bind(&package.description)
            .bind(package.price_cents).bind(package.duration_min)
            .bind(package.capacity_min).bind(package.capacity_max)
            .bind(package.corporate_discount_pct).bind(package.group_discount_pct)
            .bind(package.group_min_participants).bind(package.seasonal_discount_pct)
            .bind(package.seasonal_start).bind(package.seasonal_end)
            .bind(package.available_from).bind(package.available_until)
            .bind(Utc::now())
            .bind(&package.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn deactivate(&self, id: &str) -> Result<(), AppError> {
        let now = Utc::now();
        let result = sqlx::query("UPDATE packages SET is_active = FALSE, deactivated_at = ?, updated_at = ? WHERE id = ? AND is_active = TRUE")
            .bind(now).bind(now).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Package not found".into()));
        }
        Ok(())
    }

    async fn record_booking(&self, id: &str, revenue_cents: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE packages SET times_booked = times_booked + 1, revenue_cents = revenue_cents + ?, updated_at = ? WHERE id = ?")
            .bind(revenue_cents).bind(Utc::now()).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
