use crate::api::dtos::requests::{ContactListQuery, CreateContactRequest, UpdateContactRequest};
use crate::api::dtos::responses::{ApiResponse, ListResponse};
use crate::api::handlers::page_params;
use crate::domain::models::contact::{self, Contact, NewContactParams};
use crate::domain::ports::ContactFilter;
use crate::domain::services::triage;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if !payload.email.contains('@') || !payload.email.contains('.') {
        return Err(AppError::Validation("Invalid email address".into()));
    }
    if payload.subject.trim().is_empty() {
        return Err(AppError::Validation("Subject is required".into()));
    }
    let message_len = payload.message.trim().chars().count();
    if !(10..=2000).contains(&message_len) {
        return Err(AppError::Validation("Message must be between 10 and 2000 characters".into()));
    }

    // An explicit valid category wins; otherwise keyword triage decides.
    let category = match payload.category {
        Some(c) if contact::is_valid_category(&c) => c,
        Some(_) => return Err(AppError::Validation("Invalid category".into())),
        None => triage::categorize(&payload.subject, &payload.message),
    };
    let priority = triage::prioritize(&payload.subject, &payload.message, &category);

    let ticket = Contact::new(NewContactParams {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        subject: payload.subject,
        message: payload.message,
        category,
        priority,
    });

    let created = state.contact_repo.create(&ticket).await?;

    state.notifier.contact_acknowledgement(&created);

    info!("Contact ticket created: {} ({}/{})", created.id, created.category, created.priority);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContactListQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(ref status) = query.status {
        if !contact::is_valid_status(status) {
            return Err(AppError::Validation("Invalid status filter".into()));
        }
    }
    if let Some(ref category) = query.category {
        if !contact::is_valid_category(category) {
            return Err(AppError::Validation("Invalid category filter".into()));
        }
    }
    if let Some(ref priority) = query.priority {
        if !contact::is_valid_priority(priority) {
            return Err(AppError::Validation("Invalid priority filter".into()));
        }
    }

    let (page, per_page, offset) = page_params(query.page, query.limit);
    let filter = ContactFilter {
        status: query.status,
        category: query.category,
        priority: query.priority,
    };

    let total = state.contact_repo.count(&filter).await?;
    let contacts = state.contact_repo.list(&filter, per_page, offset).await?;

    Ok(Json(ListResponse::new(contacts, page, per_page, total)))
}

pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = state.contact_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Contact ticket not found".into()))?;
    Ok(Json(ApiResponse::ok(ticket)))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut ticket = state.contact_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Contact ticket not found".into()))?;

    if let Some(status) = payload.status {
        if !contact::is_valid_status(&status) {
            return Err(AppError::Validation("Invalid status".into()));
        }
        if status == "resolved" && ticket.status != "resolved" {
            ticket.responded_at = Some(Utc::now());
        }
        ticket.status = status;
    }

    if let Some(priority) = payload.priority {
        if !contact::is_valid_priority(&priority) {
            return Err(AppError::Validation("Invalid priority".into()));
        }
        ticket.priority = priority;
    }

    if let Some(response) = payload.response {
        ticket.response = Some(response);
    }

    let updated = state.contact_repo.update(&ticket).await?;
    Ok(Json(ApiResponse::ok(updated)))
}
