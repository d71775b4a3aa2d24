use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Catalog item for a smash session. Prices are integer cents; discount
/// percentages are whole numbers and individually capped at 50 on input.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_min: i32,
    pub capacity_min: i32,
    pub capacity_max: i32,
    pub corporate_discount_pct: i32,
    pub group_discount_pct: i32,
    pub group_min_participants: i32,
    pub seasonal_discount_pct: i32,
    pub seasonal_start: Option<NaiveDate>,
    pub seasonal_end: Option<NaiveDate>,
    pub available_from: Option<NaiveDate>,
    pub available_until: Option<NaiveDate>,
    pub is_active: bool,
    pub times_booked: i64,
    pub revenue_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deactivated_at: Option<DateTime<Utc>>,
}

pub struct NewPackageParams {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_min: i32,
    pub capacity_min: i32,
    pub capacity_max: i32,
    pub corporate_discount_pct: i32,
    pub group_discount_pct: i32,
    pub group_min_participants: i32,
    pub seasonal_discount_pct: i32,
    pub seasonal_start: Option<NaiveDate>,
    pub seasonal_end: Option<NaiveDate>,
    pub available_from: Option<NaiveDate>,
    pub available_until: Option<NaiveDate>,
}

impl Package {
    pub fn new(params: NewPackageParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            slug: params.slug,
            description: params.description,
            price_cents: params.price_cents,
            duration_min: params.duration_min,
            capacity_min: params.capacity_min,
            capacity_max: params.capacity_max,
            corporate_discount_pct: params.corporate_discount_pct,
            group_discount_pct: params.group_discount_pct,
            group_min_participants: params.group_min_participants,
            seasonal_discount_pct: params.seasonal_discount_pct,
            seasonal_start: params.seasonal_start,
            seasonal_end: params.seasonal_end,
            available_from: params.available_from,
            available_until: params.available_until,
            is_active: true,
            times_booked: 0,
            revenue_cents: 0,
            created_at: now,
            updated_at: now,
            deactivated_at: None,
        }
    }

    /// A package can be booked on `date` only inside its availability window.
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(from) = self.available_from {
            if date < from {
                return false;
            }
        }
        if let Some(until) = self.available_until {
            if date > until {
                return false;
            }
        }
        true
    }
}
