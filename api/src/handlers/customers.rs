//! Customer handlers
//!
//! Endpoints under `/api/v1/customers`.

use axum::{extract::State, http::StatusCode, Json};

use crate::domain::entities::CustomerId;
use crate::dto::{CustomerDto, CustomerListDto};
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::AppState;

/// GET /api/v1/customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<CustomerListDto>, AppError> {
    let customers = state.customer_service.list_all().await?;
    Ok(Json(CustomerListDto { customers }))
}

/// GET /api/v1/customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<CustomerDto>, AppError> {
    let customer = state.customer_service.get_by_id(CustomerId(id)).await?;
    Ok(Json(customer))
}

/// POST /api/v1/customers
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(request): AppJson<CustomerDto>,
) -> Result<(StatusCode, Json<CustomerDto>), AppError> {
    let customer = state.customer_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /api/v1/customers/:id
///
/// Replace every field of the customer.
pub async fn update_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<CustomerDto>,
) -> Result<Json<CustomerDto>, AppError> {
    let customer = state
        .customer_service
        .update_full(CustomerId(id), request)
        .await?;
    Ok(Json(customer))
}

/// PATCH /api/v1/customers/:id
///
/// Overwrite only the fields present and non-null in the body.
pub async fn patch_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<CustomerDto>,
) -> Result<Json<CustomerDto>, AppError> {
    let customer = state
        .customer_service
        .update_partial(CustomerId(id), request)
        .await?;
    Ok(Json(customer))
}

/// DELETE /api/v1/customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    state.customer_service.delete_by_id(CustomerId(id)).await?;
    Ok(StatusCode::OK)
}
