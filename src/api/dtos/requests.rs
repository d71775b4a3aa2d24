use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub package_id: String,
    pub date: String,
    pub time_slot: String,
    pub participants: i32,
    pub special_requests: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCorporateBookingRequest {
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub team_size: String,
    pub preferred_date: String,
    pub time_slot: String,
    pub duration: String,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateContactRequest {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub response: Option<String>,
}

#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub source: Option<String>,
    pub interests: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct UnsubscribeRequest {
    pub email: String,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub price_cents: i64,
    pub duration_min: i32,
    pub capacity_min: i32,
    pub capacity_max: i32,
    pub corporate_discount_pct: Option<i32>,
    pub group_discount_pct: Option<i32>,
    pub group_min_participants: Option<i32>,
    pub seasonal_discount_pct: Option<i32>,
    pub seasonal_start: Option<NaiveDate>,
    pub seasonal_end: Option<NaiveDate>,
    pub available_from: Option<NaiveDate>,
    pub available_until: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackageRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub duration_min: Option<i32>,
    pub capacity_min: Option<i32>,
    pub capacity_max: Option<i32>,
    pub corporate_discount_pct: Option<i32>,
    pub group_discount_pct: Option<i32>,
    pub group_min_participants: Option<i32>,
    pub seasonal_discount_pct: Option<i32>,
    pub seasonal_start: Option<NaiveDate>,
    pub seasonal_end: Option<NaiveDate>,
    pub available_from: Option<NaiveDate>,
    pub available_until: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub participants: i32,
    pub corporate: Option<bool>,
    pub date: Option<String>,
}

// Query-string parameters for list routes.

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct StatusListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

#[derive(Deserialize)]
pub struct PackageListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub active_only: Option<bool>,
}
