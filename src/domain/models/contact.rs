use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const CATEGORIES: [&str; 6] = [
    "general", "booking", "pricing", "corporate", "complaint", "feedback",
];
pub const PRIORITIES: [&str; 3] = ["low", "medium", "high"];
pub const STATUSES: [&str; 4] = ["new", "in_progress", "resolved", "closed"];

/// A contact-form submission tracked as a ticket until resolution.
/// Category and priority are assigned once at creation by keyword triage
/// (`domain::services::triage`) unless the request names a category.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewContactParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub category: String,
    pub priority: String,
}

impl Contact {
    pub fn new(params: NewContactParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            email: params.email,
            phone: params.phone,
            subject: params.subject,
            message: params.message,
            category: params.category,
            priority: params.priority,
            status: "new".to_string(),
            response: None,
            responded_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn is_valid_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

pub fn is_valid_priority(priority: &str) -> bool {
    PRIORITIES.contains(&priority)
}

pub fn is_valid_status(status: &str) -> bool {
    STATUSES.contains(&status)
}
