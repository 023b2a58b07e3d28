//! Embedded curated dataset store
//!
//! Populated once at construction and read-only for the life of the
//! process; reads need no locking. The dataset ships compiled into the
//! binary and can be overridden with a JSON file for fixtures or local
//! curation work.

use std::fs;
use std::path::Path;

use crate::engine::{filter_and_sort, Criteria};
use crate::error::{Error, Result};
use crate::types::{Event, NewEvent};

/// Curated baseline compiled into the binary
const CURATED_DATASET: &str = include_str!("../../data/events.json");

/// The curated baseline as drafts, for the ingestion merge
pub fn curated_baseline() -> Result<Vec<NewEvent>> {
    serde_json::from_str(CURATED_DATASET)
        .map_err(|e| Error::Config(format!("malformed dataset: {}", e)))
}

/// Read-only store over the curated dataset
#[derive(Debug)]
pub struct EmbeddedStore {
    events: Vec<Event>,
}

impl EmbeddedStore {
    /// Build the store from the compiled-in curated dataset
    pub fn curated() -> Result<Self> {
        Self::from_json(CURATED_DATASET)
    }

    /// Build the store from a JSON file of event drafts
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!("cannot read dataset {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_json(&content)
    }

    fn from_json(content: &str) -> Result<Self> {
        let drafts: Vec<NewEvent> = serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("malformed dataset: {}", e)))?;
        Self::from_drafts(drafts)
    }

    /// Build the store from drafts, validating each and assigning ids
    /// sequentially from 1 in input order
    pub fn from_drafts(drafts: Vec<NewEvent>) -> Result<Self> {
        for draft in &drafts {
            draft.validate()?;
        }
        let events = drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| draft.into_event(i as i64 + 1))
            .collect();
        Ok(Self { events })
    }

    /// Query the dataset; delegates filtering and ordering to the engine
    pub fn get_all(&self, criteria: &Criteria) -> Result<Vec<Event>> {
        filter_and_sort(self.events.clone(), criteria)
    }

    pub fn get_by_id(&self, id: i64) -> Option<Event> {
        self.events.iter().find(|e| e.id == id).cloned()
    }

    /// Writes are unsupported on the embedded dataset
    pub fn insert_many(&self) -> Result<Vec<Event>> {
        Err(Error::WriteUnsupported)
    }

    /// Full dataset in insertion order (for aggregation)
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
