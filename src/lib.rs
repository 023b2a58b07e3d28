//! AIONOS Timeline Server
//!
//! An HTTP API serving a curated timeline of AI-history milestones, with
//! filtering, pagination, and aggregate statistics, plus an offline
//! ingestion pipeline that merges harvested candidate records into the
//! curated baseline.
//!
//! # Modules
//!
//! - `types`: Core data shapes (Event, Category, Stats)
//! - `engine`: Query engine (filter/sort/limit) and aggregator
//! - `store`: Event store with embedded and external backends
//! - `ingest`: Offline merge and classification of harvested candidates
//! - `api`: Axum REST layer
//! - `config`: Environment-driven configuration
//! - `error`: Typed error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use aionos::api::{http::create_router, AppState};
//! use aionos::store::{EmbeddedStore, EventStore};
//!
//! # fn main() -> aionos::Result<()> {
//! let store = EventStore::Embedded(EmbeddedStore::curated()?);
//! let app = create_router(Arc::new(AppState::new(store)));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{Backend, Config};
pub use engine::{compute_stats, filter_and_sort, Criteria};
pub use error::{Error, Result};
pub use ingest::{merge, Candidate};
pub use store::{EmbeddedStore, EventStore, ExternalStore};
pub use types::{Category, Event, NewEvent, Stats, YearRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
