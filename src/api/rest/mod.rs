//! REST endpoint handlers
//!
//! - `GET /api/events` - filtered, ordered event list
//! - `GET /api/events/:id` - single event
//! - `GET /api/stats` - aggregate statistics
//! - `GET /api/categories` - the category contract

pub mod categories;
pub mod events;
pub mod stats;
