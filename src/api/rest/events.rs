//! Event listing and lookup endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::{error_response, ApiError, AppState};
use crate::engine::{Criteria, LIMIT_DEFAULT};
use crate::types::{Category, Event};

fn default_limit() -> usize {
    LIMIT_DEFAULT
}

/// Query parameters for listing events
///
/// `category` arrives as a raw string so an unrecognized value maps to the
/// core's `InvalidCategory` instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    /// Filter by event category
    pub category: Option<String>,
    /// Minimum importance (1-5)
    pub importance: Option<i32>,
    /// Start year (inclusive)
    pub year_from: Option<i32>,
    /// End year (inclusive)
    pub year_to: Option<i32>,
    /// Case-insensitive search in title/description
    pub search: Option<String>,
    /// Max results (1-1000)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl ListEventsParams {
    fn into_criteria(self) -> crate::error::Result<Criteria> {
        let category = match self.category {
            Some(raw) => Some(raw.parse::<Category>()?),
            None => None,
        };
        Ok(Criteria {
            category,
            min_importance: self.importance,
            year_from: self.year_from,
            year_to: self.year_to,
            search: self.search,
            limit: self.limit,
        })
    }
}

/// Response for GET /api/events
#[derive(Debug, Serialize)]
pub struct EventsListResponse {
    pub events: Vec<Event>,
    pub total: usize,
}

/// GET /api/events - list events with optional filters
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    let criteria = match params.into_criteria() {
        Ok(criteria) => criteria,
        Err(err) => return error_response(err),
    };

    match state.store.get_all(&criteria).await {
        Ok(events) => {
            let total = events.len();
            Json(EventsListResponse { events, total }).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// GET /api/events/:id - get a single event by id
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.get_by_id(id).await {
        Ok(Some(event)) => Json(event).into_response(),
        Ok(None) => {
            let error = ApiError::not_found("Event not found");
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(err) => error_response(err),
    }
}
