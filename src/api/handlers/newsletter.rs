use crate::api::dtos::requests::{StatusListQuery, SubscribeRequest, UnsubscribeRequest};
use crate::api::dtos::responses::{ApiResponse, ListResponse};
use crate::api::handlers::page_params;
use crate::domain::models::newsletter::{self, Subscriber};
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::{Query, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubscribeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim().to_lowercase();
    if !email.contains('@') || !email.contains('.') {
        return Err(AppError::Validation("Invalid email address".into()));
    }

    let source = payload.source.unwrap_or_else(|| "website".to_string());
    if !newsletter::is_valid_source(&source) {
        return Err(AppError::Validation("Invalid source".into()));
    }

    match state.newsletter_repo.find_by_email(&email).await? {
        None => {
            let subscriber = Subscriber::new(email, source, payload.interests.unwrap_or_default());
            let created = state.newsletter_repo.create(&subscriber).await?;
            info!("New subscriber: {}", created.email);
            Ok((StatusCode::CREATED, Json(ApiResponse::with_message(created, "Subscribed"))))
        }
        Some(existing) if existing.status == "subscribed" => {
            Err(AppError::Conflict("Email is already subscribed".into()))
        }
        Some(mut existing) => {
            // Resubscribe: clear the unsubscribe audit, keep engagement counters.
            existing.status = "subscribed".to_string();
            existing.source = source;
            existing.subscribed_at = Utc::now();
            existing.unsubscribed_at = None;
            existing.unsubscribe_reason = None;
            if let Some(interests) = payload.interests {
                existing.interests = serde_json::to_string(&interests)
                    .unwrap_or_else(|_| "[]".to_string());
            }
            let updated = state.newsletter_repo.update(&existing).await?;
            info!("Subscriber reactivated: {}", updated.email);
            Ok((StatusCode::OK, Json(ApiResponse::with_message(updated, "Subscription reactivated"))))
        }
    }
}

pub async fn unsubscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UnsubscribeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim().to_lowercase();

    let mut subscriber = state.newsletter_repo.find_by_email(&email).await?
        .ok_or(AppError::NotFound("Subscriber not found".into()))?;

    if subscriber.status == "unsubscribed" {
        return Err(AppError::Conflict("Email is already unsubscribed".into()));
    }

    subscriber.status = "unsubscribed".to_string();
    subscriber.unsubscribed_at = Some(Utc::now());
    subscriber.unsubscribe_reason = payload.reason;

    let updated = state.newsletter_repo.update(&subscriber).await?;

    info!("Subscriber unsubscribed: {}", updated.email);
    Ok(Json(ApiResponse::with_message(updated, "Unsubscribed")))
}

pub async fn list_subscribers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatusListQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(ref status) = query.status {
        if !newsletter::STATUSES.contains(&status.as_str()) {
            return Err(AppError::Validation("Invalid status filter".into()));
        }
    }

    let (page, per_page, offset) = page_params(query.page, query.limit);
    let status = query.status.as_deref();

    let total = state.newsletter_repo.count(status).await?;
    let subscribers = state.newsletter_repo.list(status, per_page, offset).await?;

    Ok(Json(ListResponse::new(subscribers, page, per_page, total)))
}
