//! Colaborator handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::ColaboratorDto;
use crate::error::HttpError;
use crate::json::JsonResponse;
use crate::state::AppState;

/// List all colaborators in insertion order.
pub async fn list(
    State(state): State<AppState>,
) -> Result<JsonResponse<Vec<ColaboratorDto>>, HttpError> {
    let colaborators = state.core.colaborators().list().await?;
    Ok(JsonResponse(
        colaborators.into_iter().map(ColaboratorDto::from).collect(),
    ))
}

/// Get a single colaborator.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<JsonResponse<ColaboratorDto>, HttpError> {
    let Path(id) = id?;
    let colaborator = state.core.colaborators().get(id).await?;
    Ok(JsonResponse(colaborator.into()))
}

/// Create a colaborator.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ColaboratorDto>, JsonRejection>,
) -> Result<(StatusCode, JsonResponse<ColaboratorDto>), HttpError> {
    let Json(dto) = payload?;
    let created = state.core.colaborators().create(dto.into()).await?;
    tracing::info!(id = created.id, "Colaborator added");
    Ok((StatusCode::CREATED, JsonResponse(created.into())))
}
