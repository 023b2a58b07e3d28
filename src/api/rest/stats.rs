//! Statistics endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::api::{error_response, AppState};
use crate::engine::compute_stats;

/// GET /api/stats - aggregate counts by year and category, for charts
///
/// Aggregates the full event set, not a limited page.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.all_events().await {
        Ok(events) => Json(compute_stats(&events)).into_response(),
        Err(err) => error_response(err),
    }
}
