// Results dashboard: store, filtering, and the projections the page renders.
// Table and summary follow the filtered view; teams, leaderboard and charts
// always use the full result set.

pub mod charts;
pub mod handlers;
pub mod ranking;
pub mod store;
pub mod summary;
pub mod teams;

use tracing::info;

use crate::errors::AppError;
use crate::results::summary::{compute_summary, ResultsSummary};
use crate::state::AppState;

/// Fetches the latest results and swaps them into the store.
/// On failure the store keeps whatever it held before.
pub async fn reload_results(state: &AppState) -> Result<ResultsSummary, AppError> {
    let results = state.backend.fetch_results().await?;

    let mut store = state.store.write().await;
    store.load(results);
    let summary = compute_summary(store.filtered()?);

    info!(
        "Results loaded: {} project(s), {} match(es)",
        summary.total_projects, summary.total_matches
    );
    Ok(summary)
}
