use chrono::{DateTime, NaiveDate, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Studio-wide ceiling on a single session, whatever the package says.
pub const MAX_PARTICIPANTS: i32 = 50;

pub const STATUSES: [&str; 4] = ["pending", "confirmed", "completed", "cancelled"];
pub const PAYMENT_STATUSES: [&str; 3] = ["unpaid", "paid", "refunded"];

/// Bookable slots for regular sessions, studio-local wall clock.
pub const TIME_SLOTS: [&str; 11] = [
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
    "16:00", "17:00", "18:00", "19:00", "20:00",
];

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub package_id: String,
    pub package_name: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub participants: i32,
    pub total_cents: i64,
    pub special_requests: Option<String>,
    pub status: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub package_id: String,
    pub package_name: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub participants: i32,
    pub total_cents: i64,
    pub special_requests: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect::<String>()
            .to_uppercase();

        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            reference: format!("SL-{}", code),
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            customer_phone: params.customer_phone,
            package_id: params.package_id,
            package_name: params.package_name,
            date: params.date,
            time_slot: params.time_slot,
            participants: params.participants,
            total_cents: params.total_cents,
            special_requests: params.special_requests,
            status: "pending".to_string(),
            payment_status: "unpaid".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn is_valid_status(status: &str) -> bool {
    STATUSES.contains(&status)
}

pub fn is_valid_payment_status(status: &str) -> bool {
    PAYMENT_STATUSES.contains(&status)
}

pub fn is_valid_time_slot(slot: &str) -> bool {
    TIME_SLOTS.contains(&slot)
}
