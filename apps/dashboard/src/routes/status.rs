use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::status::DataStatus;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub data: DataStatus,
    pub ready_for_matching: bool,
    pub results_loaded: bool,
    pub matching_service: String,
}

/// GET /api/v1/status
/// Dataset counts from the matching service plus whether results are loaded here.
pub async fn status_handler(State(state): State<AppState>) -> Result<Json<StatusResponse>, AppError> {
    let data = state.backend.data_status().await?;
    let results_loaded = state.store.read().await.is_loaded();

    Ok(Json(StatusResponse {
        ready_for_matching: data.ready_for_matching(),
        data,
        results_loaded,
        matching_service: state.config.matching_api_url.clone(),
    }))
}
