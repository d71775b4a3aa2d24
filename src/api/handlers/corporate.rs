use crate::api::dtos::requests::{CreateCorporateBookingRequest, StatusListQuery, UpdateBookingStatusRequest};
use crate::api::dtos::responses::{ApiResponse, ListResponse};
use crate::api::handlers::page_params;
use crate::domain::models::corporate_booking::{self, CorporateBooking, NewCorporateBookingParams};
use crate::domain::services::quotes;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

pub async fn create_corporate_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCorporateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.company_name.trim().is_empty() {
        return Err(AppError::Validation("Company name is required".into()));
    }
    if payload.contact_name.trim().is_empty() {
        return Err(AppError::Validation("Contact name is required".into()));
    }
    if !payload.contact_email.contains('@') {
        return Err(AppError::Validation("Invalid contact email".into()));
    }
    if !corporate_booking::TIME_SLOTS.contains(&payload.time_slot.as_str()) {
        return Err(AppError::Validation("Invalid time slot (morning/afternoon/evening)".into()));
    }

    let preferred_date = NaiveDate::parse_from_str(&payload.preferred_date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (expected YYYY-MM-DD)".into()))?;

    if preferred_date <= Utc::now().date_naive() {
        return Err(AppError::Validation("Preferred date must be in the future".into()));
    }

    let estimated_cents = quotes::estimate_cents(&payload.team_size, &payload.duration)
        .ok_or(AppError::Validation("Invalid team size or duration".into()))?;

    let booking = CorporateBooking::new(NewCorporateBookingParams {
        company_name: payload.company_name,
        contact_name: payload.contact_name,
        contact_email: payload.contact_email,
        contact_phone: payload.contact_phone,
        team_size: payload.team_size,
        preferred_date,
        time_slot: payload.time_slot,
        duration: payload.duration,
        estimated_cents,
        message: payload.message,
    });

    let created = state.corporate_repo.create(&booking).await?;

    state.notifier.corporate_enquiry_alert(&created);

    info!("Corporate enquiry created: {} ({})", created.company_name, created.id);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

pub async fn list_corporate_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatusListQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(ref status) = query.status {
        if !corporate_booking::is_valid_status(status) {
            return Err(AppError::Validation("Invalid status filter".into()));
        }
    }

    let (page, per_page, offset) = page_params(query.page, query.limit);
    let status = query.status.as_deref();

    let total = state.corporate_repo.count(status).await?;
    let bookings = state.corporate_repo.list(status, per_page, offset).await?;

    Ok(Json(ListResponse::new(bookings, page, per_page, total)))
}

pub async fn get_corporate_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.corporate_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Corporate booking not found".into()))?;
    Ok(Json(ApiResponse::ok(booking)))
}

pub async fn update_corporate_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !corporate_booking::is_valid_status(&payload.status) {
        return Err(AppError::Validation("Invalid corporate booking status".into()));
    }

    let updated = state.corporate_repo.update_status(&id, &payload.status).await?;

    info!("Corporate booking {} status set to {}", updated.id, updated.status);
    Ok(Json(ApiResponse::ok(updated)))
}
