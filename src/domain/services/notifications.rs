use crate::domain::models::{
    booking::Booking, contact::Contact, corporate_booking::CorporateBooking,
};
use crate::domain::ports::EmailService;
use std::sync::Arc;
use tera::Tera;
use tracing::error;

/// Outbound transactional mail. Every send is fire-and-forget: the request
/// that triggered it has already succeeded, a failed send is logged and
/// dropped (no retry queue).
pub struct Notifier {
    email_service: Arc<dyn EmailService>,
    templates: Arc<Tera>,
    notify_email: String,
    frontend_url: String,
}

fn format_amount(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}

impl Notifier {
    pub fn new(
        email_service: Arc<dyn EmailService>,
        templates: Arc<Tera>,
        notify_email: String,
        frontend_url: String,
    ) -> Self {
        Self {
            email_service,
            templates,
            notify_email,
            frontend_url,
        }
    }

    fn dispatch(&self, recipient: String, subject: String, html_body: String) {
        let service = self.email_service.clone();
        tokio::spawn(async move {
            if let Err(e) = service.send(&recipient, &subject, &html_body).await {
                error!("Email to {} failed (dropped): {}", recipient, e);
            }
        });
    }

    pub fn booking_confirmation(&self, booking: &Booking) {
        let mut context = tera::Context::new();
        context.insert("customer_name", &booking.customer_name);
        context.insert("reference", &booking.reference);
        context.insert("package_name", &booking.package_name);
        context.insert("date", &booking.date.format("%Y-%m-%d").to_string());
        context.insert("time_slot", &booking.time_slot);
        context.insert("participants", &booking.participants);
        context.insert("total", &format_amount(booking.total_cents));
        context.insert("site_url", &self.frontend_url);

        let html = match self.templates.render("booking_confirmation.html", &context) {
            Ok(html) => html,
            Err(e) => {
                error!("Failed to render booking confirmation: {:?}", e);
                return;
            }
        };

        self.dispatch(
            booking.customer_email.clone(),
            format!("Booking received: {}", booking.reference),
            html,
        );

        self.dispatch(
            self.notify_email.clone(),
            format!("New booking {} on {}", booking.reference, booking.date),
            format!(
                "<p>{} ({}, {}) booked {} for {} people on {} at {}. Total: {}</p>",
                booking.customer_name,
                booking.customer_email,
                booking.customer_phone,
                booking.package_name,
                booking.participants,
                booking.date,
                booking.time_slot,
                format_amount(booking.total_cents),
            ),
        );
    }

    pub fn contact_acknowledgement(&self, contact: &Contact) {
        let mut context = tera::Context::new();
        context.insert("name", &contact.name);
        context.insert("subject", &contact.subject);
        context.insert("ticket_id", &contact.id);
        context.insert("site_url", &self.frontend_url);

        let html = match self.templates.render("contact_ack.html", &context) {
            Ok(html) => html,
            Err(e) => {
                error!("Failed to render contact acknowledgement: {:?}", e);
                return;
            }
        };

        self.dispatch(
            contact.email.clone(),
            "We received your message".to_string(),
            html,
        );
    }

    pub fn corporate_enquiry_alert(&self, booking: &CorporateBooking) {
        self.dispatch(
            self.notify_email.clone(),
            format!("Corporate enquiry from {}", booking.company_name),
            format!(
                "<p>{} ({}) asked about a {} team event on {} ({}, {}). Estimated: {}</p>",
                booking.contact_name,
                booking.contact_email,
                booking.team_size,
                booking.preferred_date,
                booking.time_slot,
                booking.duration,
                format_amount(booking.estimated_cents),
            ),
        );
    }
}
