use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, ContactRepository, CorporateBookingRepository, EmailService,
    NewsletterRepository, PackageRepository,
};
use crate::domain::services::notifications::Notifier;
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub package_repo: Arc<dyn PackageRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub corporate_repo: Arc<dyn CorporateBookingRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub newsletter_repo: Arc<dyn NewsletterRepository>,
    pub email_service: Arc<dyn EmailService>,
    pub notifier: Arc<Notifier>,
    pub templates: Arc<Tera>,
}
