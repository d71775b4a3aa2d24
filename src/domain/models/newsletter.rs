use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const SOURCES: [&str; 3] = ["website", "booking", "contact"];
pub const STATUSES: [&str; 2] = ["subscribed", "unsubscribed"];

/// Newsletter subscriber. Emails are stored lowercased and unique; the
/// `interests` column holds a JSON string array. Engagement counters survive
/// an unsubscribe/resubscribe cycle.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub status: String,
    pub source: String,
    pub interests: String,
    pub emails_sent: i64,
    pub emails_opened: i64,
    pub emails_clicked: i64,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
    pub unsubscribe_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn new(email: String, source: String, interests: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.trim().to_lowercase(),
            status: "subscribed".to_string(),
            source,
            interests: serde_json::to_string(&interests).unwrap_or_else(|_| "[]".to_string()),
            emails_sent: 0,
            emails_opened: 0,
            emails_clicked: 0,
            subscribed_at: now,
            unsubscribed_at: None,
            unsubscribe_reason: None,
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn is_valid_source(source: &str) -> bool {
    SOURCES.contains(&source)
}
