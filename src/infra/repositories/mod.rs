pub mod sqlite_booking_repo;
pub mod sqlite_contact_repo;
pub mod sqlite_corporate_repo;
pub mod sqlite_newsletter_repo;
pub mod sqlite_package_repo;

pub mod postgres_booking_repo;
pub mod postgres_contact_repo;
pub mod postgres_corporate_repo;
pub mod postgres_newsletter_repo;
pub mod postgres_package_repo;
