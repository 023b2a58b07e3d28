//! Data types for the AIONOS timeline server
//!
//! This module contains the core data shapes shared between the store,
//! the query engine, and the API layer.

mod event;
mod stats;

pub use event::{
    Category, Event, NewEvent, DESCRIPTION_MAX, IMPORTANCE_DEFAULT, TITLE_MAX, YEAR_MAX, YEAR_MIN,
};
pub use stats::{Stats, YearRange};
