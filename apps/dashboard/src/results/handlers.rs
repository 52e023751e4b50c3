use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::results::MatchResult;
use crate::results::charts::{build_charts, ChartData};
use crate::results::ranking::{build_leaderboard, build_table, LeaderboardEntry, TableRow};
use crate::results::reload_results;
use crate::results::store::{FilterCriteria, FilterOptions};
use crate::results::summary::{compute_summary, ResultsSummary};
use crate::results::teams::{compose_teams, TeamComposition};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub criteria: FilterCriteria,
    pub options: FilterOptions,
}

#[derive(Debug, Serialize)]
pub struct FilteredViewResponse {
    pub criteria: FilterCriteria,
    pub summary: ResultsSummary,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Serialize)]
pub struct MatchRunResponse {
    pub message: Option<String>,
    pub summary: ResultsSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Loading
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/results/refresh
pub async fn handle_refresh(
    State(state): State<AppState>,
) -> Result<Json<ResultsSummary>, AppError> {
    Ok(Json(reload_results(&state).await?))
}

/// POST /api/v1/match
///
/// Runs matching on the service, then pulls the fresh results into the store.
pub async fn handle_run_matching(
    State(state): State<AppState>,
) -> Result<Json<MatchRunResponse>, AppError> {
    let status = state.backend.data_status().await?;
    if !status.ready_for_matching() {
        return Err(AppError::Validation(
            "Upload both employee and project data before matching".to_string(),
        ));
    }

    let message = state.backend.run_matching().await?;
    let summary = reload_results(&state).await?;
    Ok(Json(MatchRunResponse { message, summary }))
}

// ────────────────────────────────────────────────────────────────────────────
// Filters
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/results/filters
pub async fn handle_get_filters(
    State(state): State<AppState>,
) -> Result<Json<FiltersResponse>, AppError> {
    let store = state.store.read().await;
    Ok(Json(FiltersResponse {
        criteria: store.criteria().clone(),
        options: store.filter_options()?,
    }))
}

/// PUT /api/v1/results/filters
///
/// Recomputes the filtered view and returns what the page re-renders:
/// the summary and the table.
pub async fn handle_apply_filters(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<FilteredViewResponse>, AppError> {
    if criteria.is_empty() {
        debug!("Filters cleared");
    }

    let mut store = state.store.write().await;
    let filtered = store.apply_filters(criteria)?;
    let summary = compute_summary(filtered);
    let rows = build_table(filtered);
    info!("Filters applied: {} row(s) visible", rows.len());

    Ok(Json(FilteredViewResponse {
        criteria: store.criteria().clone(),
        summary,
        rows,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Projections
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/results/summary
pub async fn handle_summary(
    State(state): State<AppState>,
) -> Result<Json<ResultsSummary>, AppError> {
    let store = state.store.read().await;
    Ok(Json(compute_summary(store.filtered()?)))
}

/// GET /api/v1/results/table
pub async fn handle_table(State(state): State<AppState>) -> Result<Json<Vec<TableRow>>, AppError> {
    let store = state.store.read().await;
    Ok(Json(build_table(store.filtered()?)))
}

/// GET /api/v1/results/teams
pub async fn handle_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamComposition>>, AppError> {
    let store = state.store.read().await;
    Ok(Json(compose_teams(store.results()?)))
}

/// GET /api/v1/results/leaderboard
pub async fn handle_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let store = state.store.read().await;
    Ok(Json(build_leaderboard(store.results()?)))
}

/// GET /api/v1/results/charts
pub async fn handle_charts(State(state): State<AppState>) -> Result<Json<ChartData>, AppError> {
    let store = state.store.read().await;
    Ok(Json(build_charts(store.results()?)))
}

/// GET /api/v1/results/projects/:project_id/matches/:employee_id
pub async fn handle_match_detail(
    State(state): State<AppState>,
    Path((project_id, employee_id)): Path<(String, String)>,
) -> Result<Json<MatchResult>, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.find_match(&project_id, &employee_id)?.clone()))
}

/// GET /api/v1/report
///
/// Passes the service's PDF through. Refuses early when nothing is loaded.
pub async fn handle_report(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.store.read().await.results()?;

    let pdf = state.backend.download_report().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"matching-report.pdf\"",
            ),
        ],
        pdf,
    ))
}
