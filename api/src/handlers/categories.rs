//! Category handlers
//!
//! Endpoints under `/api/v1/categories`.

use axum::{extract::State, http::StatusCode, Json};

use crate::domain::entities::CategoryId;
use crate::dto::{CategoryDto, CategoryListDto};
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::AppState;

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListDto>, AppError> {
    let categories = state.category_service.list_all().await?;
    Ok(Json(CategoryListDto { categories }))
}

/// GET /api/v1/categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<CategoryDto>, AppError> {
    Ok(Json(state.category_service.get_by_id(CategoryId(id)).await?))
}

/// GET /api/v1/categories/name/:name
pub async fn get_category_by_name(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> Result<Json<CategoryDto>, AppError> {
    Ok(Json(state.category_service.get_by_name(&name).await?))
}

/// POST /api/v1/categories
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(request): AppJson<CategoryDto>,
) -> Result<(StatusCode, Json<CategoryDto>), AppError> {
    let category = state.category_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<CategoryDto>,
) -> Result<Json<CategoryDto>, AppError> {
    Ok(Json(
        state
            .category_service
            .update_full(CategoryId(id), request)
            .await?,
    ))
}

/// PATCH /api/v1/categories/:id
pub async fn patch_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<CategoryDto>,
) -> Result<Json<CategoryDto>, AppError> {
    Ok(Json(
        state
            .category_service
            .update_partial(CategoryId(id), request)
            .await?,
    ))
}

/// DELETE /api/v1/categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    state.category_service.delete_by_id(CategoryId(id)).await?;
    Ok(StatusCode::OK)
}
