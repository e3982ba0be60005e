//! Weather forecast handler.

use absantee_core::WeatherForecast;
use axum::extract::State;

use crate::json::JsonResponse;
use crate::state::AppState;

/// Sample forecast for the next five days.
pub async fn forecast(State(state): State<AppState>) -> JsonResponse<Vec<WeatherForecast>> {
    JsonResponse(state.core.weather().forecast())
}
