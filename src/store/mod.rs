//! Event Store - canonical event set behind a backend-neutral surface
//!
//! Two variants, selected once at startup from configuration: an embedded
//! curated dataset (read-only) and an external PostgREST-style backend.
//! The query engine and API handlers never branch on backend identity.

mod embedded;
mod external;

pub use embedded::{curated_baseline, EmbeddedStore};
pub use external::ExternalStore;

use crate::engine::Criteria;
use crate::error::Result;
use crate::types::{Event, NewEvent};

/// The canonical event store, embedded or external
pub enum EventStore {
    Embedded(EmbeddedStore),
    External(ExternalStore),
}

impl EventStore {
    /// Fetch events matching the criteria, chronologically ordered
    ///
    /// Both variants validate criteria up front and exhibit identical
    /// filtering and ordering semantics.
    pub async fn get_all(&self, criteria: &Criteria) -> Result<Vec<Event>> {
        match self {
            EventStore::Embedded(store) => store.get_all(criteria),
            EventStore::External(store) => store.get_all(criteria).await,
        }
    }

    /// Fetch the full event set, unfiltered and unlimited (for aggregation)
    pub async fn all_events(&self) -> Result<Vec<Event>> {
        match self {
            EventStore::Embedded(store) => Ok(store.events().to_vec()),
            EventStore::External(store) => store.all_events().await,
        }
    }

    /// Look up a single event; an unknown id is `Ok(None)`, not a failure
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Event>> {
        match self {
            EventStore::Embedded(store) => Ok(store.get_by_id(id)),
            EventStore::External(store) => store.get_by_id(id).await,
        }
    }

    /// Bulk-insert validated drafts, returning the stored events with ids
    ///
    /// Every draft is validated before any write; the embedded variant
    /// always fails with `WriteUnsupported` and changes nothing.
    pub async fn insert_many(&self, drafts: Vec<NewEvent>) -> Result<Vec<Event>> {
        for draft in &drafts {
            draft.validate()?;
        }
        match self {
            EventStore::Embedded(store) => store.insert_many(),
            EventStore::External(store) => store.insert_many(&drafts).await,
        }
    }

    /// Backend name for diagnostics and the health endpoint
    pub fn backend(&self) -> &'static str {
        match self {
            EventStore::Embedded(_) => "embedded",
            EventStore::External(_) => "external",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, EventStore::Embedded(_))
    }
}
