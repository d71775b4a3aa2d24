use crate::api::dtos::requests::{
    BookingListQuery, CreateBookingRequest, UpdateBookingStatusRequest, UpdatePaymentStatusRequest,
};
use crate::api::dtos::responses::{ApiResponse, ListResponse};
use crate::api::handlers::page_params;
use crate::domain::models::booking::{self, Booking, NewBookingParams};
use crate::domain::ports::BookingFilter;
use crate::domain::services::pricing;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if !payload.email.contains('@') {
        return Err(AppError::Validation("Invalid email address".into()));
    }
    if payload.phone.trim().is_empty() {
        return Err(AppError::Validation("Phone number is required".into()));
    }
    if !booking::is_valid_time_slot(&payload.time_slot) {
        return Err(AppError::Validation("Invalid time slot".into()));
    }

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (expected YYYY-MM-DD)".into()))?;

    if date <= Utc::now().date_naive() {
        return Err(AppError::Validation("Booking date must be in the future".into()));
    }

    let package = state.package_repo.find_by_id(&payload.package_id).await?
        .filter(|p| p.is_active)
        .ok_or(AppError::NotFound("Package not found".into()))?;

    if !package.is_available_on(date) {
        return Err(AppError::Validation("Package is not available on that date".into()));
    }
    if payload.participants < 1 || payload.participants > booking::MAX_PARTICIPANTS {
        return Err(AppError::Validation(format!(
            "Participants must be between 1 and {}",
            booking::MAX_PARTICIPANTS
        )));
    }
    if payload.participants < package.capacity_min || payload.participants > package.capacity_max {
        return Err(AppError::Validation(format!(
            "Participants must be between {} and {}",
            package.capacity_min, package.capacity_max
        )));
    }

    if state.booking_repo.slot_taken(date, &payload.time_slot).await? {
        return Err(AppError::Conflict("Time slot is already booked".into()));
    }

    // Corporate discounts never apply to regular bookings.
    let quote = pricing::quote(&package, payload.participants, false, date);

    let booking = Booking::new(NewBookingParams {
        customer_name: payload.name,
        customer_email: payload.email,
        customer_phone: payload.phone,
        package_id: package.id.clone(),
        package_name: package.name.clone(),
        date,
        time_slot: payload.time_slot,
        participants: payload.participants,
        total_cents: quote.final_cents,
        special_requests: payload.special_requests,
    });

    // The partial unique index on (date, time_slot) catches the race the
    // pre-check above cannot; sqlx maps that to a 409.
    let created = state.booking_repo.create(&booking).await?;

    state.package_repo.record_booking(&package.id, created.total_cents).await?;

    state.notifier.booking_confirmation(&created);

    info!("Booking created: {} ({})", created.reference, created.id);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(ref status) = query.status {
        if !booking::is_valid_status(status) {
            return Err(AppError::Validation("Invalid status filter".into()));
        }
    }

    let (page, per_page, offset) = page_params(query.page, query.limit);
    let filter = BookingFilter {
        status: query.status,
        date_from: query.date_from,
        date_to: query.date_to,
    };

    let total = state.booking_repo.count(&filter).await?;
    let bookings = state.booking_repo.list(&filter, per_page, offset).await?;

    Ok(Json(ListResponse::new(bookings, page, per_page, total)))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(ApiResponse::ok(booking)))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !booking::is_valid_status(&payload.status) {
        return Err(AppError::Validation("Invalid booking status".into()));
    }

    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    booking.status = payload.status;
    let updated = state.booking_repo.update(&booking).await?;

    info!("Booking {} status set to {}", updated.reference, updated.status);
    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn update_payment_status(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdatePaymentStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !booking::is_valid_payment_status(&payload.payment_status) {
        return Err(AppError::Validation("Invalid payment status".into()));
    }

    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    booking.payment_status = payload.payment_status;
    let updated = state.booking_repo.update(&booking).await?;

    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.status == "cancelled" {
        return Err(AppError::Conflict("Booking is already cancelled".into()));
    }

    booking.status = "cancelled".to_string();
    let cancelled = state.booking_repo.update(&booking).await?;

    info!("Booking cancelled: {}", cancelled.reference);
    Ok(Json(ApiResponse::with_message(cancelled, "Booking cancelled")))
}
