use axum::{
    body::Body,
    extract::Request,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{booking, contact, corporate, health, newsletter, package};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Packages
        .route("/api/v1/packages", get(package::list_packages).post(package::create_package))
        .route("/api/v1/packages/{id}", get(package::get_package).put(package::update_package).delete(package::delete_package))
        .route("/api/v1/packages/{id}/quote", post(package::quote_package))

        // Bookings
        .route("/api/v1/bookings", get(booking::list_bookings).post(booking::create_booking))
        .route("/api/v1/bookings/{id}", get(booking::get_booking).delete(booking::cancel_booking))
        .route("/api/v1/bookings/{id}/status", patch(booking::update_booking_status))
        .route("/api/v1/bookings/{id}/payment", patch(booking::update_payment_status))

        // Corporate enquiries
        .route("/api/v1/corporate", get(corporate::list_corporate_bookings).post(corporate::create_corporate_booking))
        .route("/api/v1/corporate/{id}", get(corporate::get_corporate_booking))
        .route("/api/v1/corporate/{id}/status", patch(corporate::update_corporate_status))

        // Contact tickets
        .route("/api/v1/contact", get(contact::list_contacts).post(contact::create_contact))
        .route("/api/v1/contact/{id}", get(contact::get_contact).patch(contact::update_contact))

        // Newsletter
        .route("/api/v1/newsletter/subscribe", post(newsletter::subscribe))
        .route("/api/v1/newsletter/unsubscribe", post(newsletter::unsubscribe))
        .route("/api/v1/newsletter/subscribers", get(newsletter::list_subscribers))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
