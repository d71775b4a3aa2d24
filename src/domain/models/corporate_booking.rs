use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const TEAM_SIZES: [&str; 4] = ["10-20", "21-50", "51-100", "100+"];
pub const TIME_SLOTS: [&str; 3] = ["morning", "afternoon", "evening"];
pub const DURATIONS: [&str; 4] = ["2h", "3h", "4h", "full_day"];
pub const STATUSES: [&str; 5] = ["pending", "quoted", "confirmed", "completed", "cancelled"];

/// Quote-based reservation for company team events. The estimate comes from
/// the flat-rate table in `domain::services::quotes`, never from the
/// per-person package pricing.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CorporateBooking {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub team_size: String,
    pub preferred_date: NaiveDate,
    pub time_slot: String,
    pub duration: String,
    pub estimated_cents: i64,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewCorporateBookingParams {
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub team_size: String,
    pub preferred_date: NaiveDate,
    pub time_slot: String,
    pub duration: String,
    pub estimated_cents: i64,
    pub message: Option<String>,
}

impl CorporateBooking {
    pub fn new(params: NewCorporateBookingParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            company_name: params.company_name,
            contact_name: params.contact_name,
            contact_email: params.contact_email,
            contact_phone: params.contact_phone,
            team_size: params.team_size,
            preferred_date: params.preferred_date,
            time_slot: params.time_slot,
            duration: params.duration,
            estimated_cents: params.estimated_cents,
            message: params.message,
            status: "pending".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn is_valid_status(status: &str) -> bool {
    STATUSES.contains(&status)
}
