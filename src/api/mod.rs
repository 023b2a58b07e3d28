//! REST API for the timeline UI
//!
//! Thin marshalling over the store and engine: handlers translate query
//! strings into criteria, call the core, and serialize results.

pub mod http;
pub mod rest;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::Error;
use crate::store::EventStore;

/// Shared handler state
pub struct AppState {
    pub store: EventStore,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }
}

/// API error envelope
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }
}

/// Map a core error onto an HTTP status and error envelope
pub fn error_response(err: Error) -> Response {
    let (status, code) = match &err {
        Error::InvalidCategory(_) | Error::InvalidRange { .. } | Error::InvalidEvent(_) => {
            (StatusCode::BAD_REQUEST, "BAD_REQUEST")
        }
        Error::WriteUnsupported => (StatusCode::FORBIDDEN, "WRITE_UNSUPPORTED"),
        Error::StoreUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE"),
        Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };
    let body = ApiError {
        error: err.to_string(),
        code: code.to_string(),
    };
    (status, Json(body)).into_response()
}
