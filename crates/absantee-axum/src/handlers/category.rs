//! Category handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::{CategoryDto, CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::HttpError;
use crate::json::JsonResponse;
use crate::state::AppState;

/// List all categories.
pub async fn list(
    State(state): State<AppState>,
) -> Result<JsonResponse<Vec<CategoryDto>>, HttpError> {
    let categories = state.core.categories().list().await?;
    Ok(JsonResponse(
        categories.into_iter().map(CategoryDto::from).collect(),
    ))
}

/// Get a single category.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<JsonResponse<CategoryDto>, HttpError> {
    let Path(id) = id?;
    Ok(JsonResponse(state.core.categories().get(id).await?.into()))
}

/// Create a category.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, JsonResponse<CategoryDto>), HttpError> {
    let Json(req) = payload?;
    let created = state.core.categories().create(req.into()).await?;
    Ok((StatusCode::CREATED, JsonResponse(created.into())))
}

/// Update a category.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<JsonResponse<CategoryDto>, HttpError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let updated = state.core.categories().update(id, req.into()).await?;
    Ok(JsonResponse(updated.into()))
}

/// Delete a category, returning the removed row.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<JsonResponse<CategoryDto>, HttpError> {
    let Path(id) = id?;
    Ok(JsonResponse(state.core.categories().delete(id).await?.into()))
}
