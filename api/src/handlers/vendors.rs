//! Vendor handlers
//!
//! Endpoints under `/api/v1/vendors`.

use axum::{extract::State, http::StatusCode, Json};

use crate::domain::entities::VendorId;
use crate::dto::{VendorDto, VendorListDto};
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::AppState;

/// GET /api/v1/vendors
pub async fn list_vendors(State(state): State<AppState>) -> Result<Json<VendorListDto>, AppError> {
    let vendors = state.vendor_service.list_all().await?;
    Ok(Json(VendorListDto { vendors }))
}

/// GET /api/v1/vendors/:id
pub async fn get_vendor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<VendorDto>, AppError> {
    Ok(Json(state.vendor_service.get_by_id(VendorId(id)).await?))
}

/// POST /api/v1/vendors
pub async fn create_vendor(
    State(state): State<AppState>,
    AppJson(request): AppJson<VendorDto>,
) -> Result<(StatusCode, Json<VendorDto>), AppError> {
    let vendor = state.vendor_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// PUT /api/v1/vendors/:id
pub async fn update_vendor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<VendorDto>,
) -> Result<Json<VendorDto>, AppError> {
    Ok(Json(
        state.vendor_service.update_full(VendorId(id), request).await?,
    ))
}

/// PATCH /api/v1/vendors/:id
pub async fn patch_vendor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<VendorDto>,
) -> Result<Json<VendorDto>, AppError> {
    Ok(Json(
        state
            .vendor_service
            .update_partial(VendorId(id), request)
            .await?,
    ))
}

/// DELETE /api/v1/vendors/:id
pub async fn delete_vendor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    state.vendor_service.delete_by_id(VendorId(id)).await?;
    Ok(StatusCode::OK)
}
