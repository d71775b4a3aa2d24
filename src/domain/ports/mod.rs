use crate::domain::models::{
    booking::Booking, contact::Contact, corporate_booking::CorporateBooking,
    newsletter::Subscriber, package::Package,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// List filters for admin booking queries.
#[derive(Debug, Default, Clone)]
pub struct BookingFilter {
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Default, Clone)]
pub struct ContactFilter {
    pub status: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn create(&self, package: &Package) -> Result<Package, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Package>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Package>, AppError>;
    async fn list(&self, active_only: bool, limit: i64, offset: i64) -> Result<Vec<Package>, AppError>;
    async fn count(&self, active_only: bool) -> Result<i64, AppError>;
    async fn update(&self, package: &Package) -> Result<Package, AppError>;
    async fn deactivate(&self, id: &str) -> Result<(), AppError>;
    /// Bumps times_booked and revenue after a confirmed sale.
    async fn record_booking(&self, id: &str, revenue_cents: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list(&self, filter: &BookingFilter, limit: i64, offset: i64) -> Result<Vec<Booking>, AppError>;
    async fn count(&self, filter: &BookingFilter) -> Result<i64, AppError>;
    async fn slot_taken(&self, date: NaiveDate, time_slot: &str) -> Result<bool, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait CorporateBookingRepository: Send + Sync {
    async fn create(&self, booking: &CorporateBooking) -> Result<CorporateBooking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<CorporateBooking>, AppError>;
    async fn list(&self, status: Option<&str>, limit: i64, offset: i64) -> Result<Vec<CorporateBooking>, AppError>;
    async fn count(&self, status: Option<&str>) -> Result<i64, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<CorporateBooking, AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: &Contact) -> Result<Contact, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, AppError>;
    async fn list(&self, filter: &ContactFilter, limit: i64, offset: i64) -> Result<Vec<Contact>, AppError>;
    async fn count(&self, filter: &ContactFilter) -> Result<i64, AppError>;
    async fn update(&self, contact: &Contact) -> Result<Contact, AppError>;
}

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn create(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, AppError>;
    async fn list(&self, status: Option<&str>, limit: i64, offset: i64) -> Result<Vec<Subscriber>, AppError>;
    async fn count(&self, status: Option<&str>) -> Result<i64, AppError>;
    async fn update(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}
