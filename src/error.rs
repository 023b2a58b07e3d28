//! Error taxonomy for the timeline core
//!
//! Validation errors are detected before any store access and reported
//! synchronously. A missing id is never an error; `get_by_id` returns
//! `Ok(None)` and callers must distinguish absence from failure.

use thiserror::Error;

/// Result type for timeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the timeline core
#[derive(Debug, Error)]
pub enum Error {
    /// Unrecognized category value supplied as a filter or on insert
    #[error("unknown category '{0}'")]
    InvalidCategory(String),

    /// Numeric filter parameter outside its documented bound
    #[error("{param} out of range: {value} (valid: {min}..={max})")]
    InvalidRange {
        param: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Event draft rejected before insertion (empty or oversized fields)
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// Insert attempted against the read-only embedded dataset
    #[error("store is read-only; configure an external backend to insert events")]
    WriteUnsupported,

    /// External persistence backend unreachable or erroring
    #[error("event store unavailable: {0}")]
    StoreUnavailable(String),

    /// Startup configuration problem (bad env value, unreadable dataset)
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Range-check helper used by criteria and draft validation
    pub(crate) fn check_range(param: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
        if value < min || value > max {
            return Err(Error::InvalidRange {
                param,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::StoreUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_accepts_bounds() {
        assert!(Error::check_range("limit", 1, 1, 1000).is_ok());
        assert!(Error::check_range("limit", 1000, 1, 1000).is_ok());
    }

    #[test]
    fn test_check_range_rejects_outside() {
        let err = Error::check_range("limit", 0, 1, 1000).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { param: "limit", .. }));
    }
}
