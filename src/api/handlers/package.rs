use crate::api::dtos::requests::{CreatePackageRequest, PackageListQuery, QuoteRequest, UpdatePackageRequest};
use crate::api::dtos::responses::{ApiResponse, ListResponse};
use crate::api::handlers::page_params;
use crate::domain::models::booking;
use crate::domain::models::package::{NewPackageParams, Package};
use crate::domain::services::pricing::{self, MAX_TOTAL_DISCOUNT_PCT};
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn validate_package(package: &Package) -> Result<(), AppError> {
    if package.name.trim().is_empty() {
        return Err(AppError::Validation("Package name is required".into()));
    }
    if package.price_cents <= 0 {
        return Err(AppError::Validation("Price must be positive".into()));
    }
    if package.duration_min <= 0 {
        return Err(AppError::Validation("Duration must be positive".into()));
    }
    if package.capacity_min < 1 || package.capacity_min > package.capacity_max {
        return Err(AppError::Validation("Invalid capacity range".into()));
    }
    if package.capacity_max > booking::MAX_PARTICIPANTS {
        return Err(AppError::Validation(format!(
            "Capacity cannot exceed {} participants",
            booking::MAX_PARTICIPANTS
        )));
    }
    for pct in [
        package.corporate_discount_pct,
        package.group_discount_pct,
        package.seasonal_discount_pct,
    ] {
        if !(0..=MAX_TOTAL_DISCOUNT_PCT).contains(&pct) {
            return Err(AppError::Validation(format!(
                "Discount percentages must be between 0 and {}",
                MAX_TOTAL_DISCOUNT_PCT
            )));
        }
    }
    if package.group_min_participants < 0 {
        return Err(AppError::Validation("Group threshold cannot be negative".into()));
    }
    match (package.seasonal_start, package.seasonal_end) {
        (Some(start), Some(end)) if start > end => {
            return Err(AppError::Validation("Seasonal range is inverted".into()));
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(AppError::Validation("Seasonal range needs both start and end".into()));
        }
        _ => {}
    }
    if let (Some(from), Some(until)) = (package.available_from, package.available_until) {
        if from > until {
            return Err(AppError::Validation("Availability window is inverted".into()));
        }
    }
    Ok(())
}

pub async fn create_package(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePackageRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.package_repo.find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::Conflict("A package with that name already exists".into()));
    }

    let slug = payload.slug.unwrap_or_else(|| slugify(&payload.name));

    let package = Package::new(NewPackageParams {
        name: payload.name,
        slug,
        description: payload.description,
        price_cents: payload.price_cents,
        duration_min: payload.duration_min,
        capacity_min: payload.capacity_min,
        capacity_max: payload.capacity_max,
        corporate_discount_pct: payload.corporate_discount_pct.unwrap_or(0),
        group_discount_pct: payload.group_discount_pct.unwrap_or(0),
        group_min_participants: payload.group_min_participants.unwrap_or(0),
        seasonal_discount_pct: payload.seasonal_discount_pct.unwrap_or(0),
        seasonal_start: payload.seasonal_start,
        seasonal_end: payload.seasonal_end,
        available_from: payload.available_from,
        available_until: payload.available_until,
    });

    validate_package(&package)?;

    let created = state.package_repo.create(&package).await?;

    info!("Package created: {} ({})", created.name, created.id);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

pub async fn list_packages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PackageListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let active_only = query.active_only.unwrap_or(true);
    let (page, per_page, offset) = page_params(query.page, query.limit);

    let total = state.package_repo.count(active_only).await?;
    let packages = state.package_repo.list(active_only, per_page, offset).await?;

    Ok(Json(ListResponse::new(packages, page, per_page, total)))
}

pub async fn get_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let package = state.package_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Package not found".into()))?;
    Ok(Json(ApiResponse::ok(package)))
}

pub async fn update_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePackageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut package = state.package_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Package not found".into()))?;

    if let Some(name) = payload.name {
        if let Some(other) = state.package_repo.find_by_name(&name).await? {
            if other.id != package.id {
                return Err(AppError::Conflict("A package with that name already exists".into()));
            }
        }
        package.name = name;
    }
    if let Some(slug) = payload.slug {
        package.slug = slug;
    }
    if let Some(description) = payload.description {
        package.description = description;
    }
    if let Some(price_cents) = payload.price_cents {
        package.price_cents = price_cents;
    }
    if let Some(duration_min) = payload.duration_min {
        package.duration_min = duration_min;
    }
    if let Some(capacity_min) = payload.capacity_min {
        package.capacity_min = capacity_min;
    }
    if let Some(capacity_max) = payload.capacity_max {
        package.capacity_max = capacity_max;
    }
    if let Some(pct) = payload.corporate_discount_pct {
        package.corporate_discount_pct = pct;
    }
    if let Some(pct) = payload.group_discount_pct {
        package.group_discount_pct = pct;
    }
    if let Some(threshold) = payload.group_min_participants {
        package.group_min_participants = threshold;
    }
    if let Some(pct) = payload.seasonal_discount_pct {
        package.seasonal_discount_pct = pct;
    }
    if payload.seasonal_start.is_some() {
        package.seasonal_start = payload.seasonal_start;
    }
    if payload.seasonal_end.is_some() {
        package.seasonal_end = payload.seasonal_end;
    }
    if payload.available_from.is_some() {
        package.available_from = payload.available_from;
    }
    if payload.available_until.is_some() {
        package.available_until = payload.available_until;
    }

    validate_package(&package)?;

    let updated = state.package_repo.update(&package).await?;
    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn delete_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.package_repo.deactivate(&id).await?;
    info!("Package deactivated: {}", id);
    Ok(Json(ApiResponse::with_message(serde_json::json!({"id": id}), "Package deactivated")))
}

pub async fn quote_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<QuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Deactivated packages are invisible here, same as for bookings.
    let package = state.package_repo.find_by_id(&id).await?
        .filter(|p| p.is_active)
        .ok_or(AppError::NotFound("Package not found".into()))?;

    if payload.participants < 1 {
        return Err(AppError::Validation("Participants must be at least 1".into()));
    }
    if payload.participants > package.capacity_max {
        return Err(AppError::Validation(format!(
            "Package takes at most {} participants",
            package.capacity_max
        )));
    }

    let date = match payload.date {
        Some(ref raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date format (expected YYYY-MM-DD)".into()))?,
        None => Utc::now().date_naive(),
    };

    let quote = pricing::quote(&package, payload.participants, payload.corporate.unwrap_or(false), date);
    Ok(Json(ApiResponse::ok(quote)))
}
