//! Aggregate statistics shapes

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Category;

/// Minimum and maximum observed year; both `None` for an empty event set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Summary statistics over an event set, for charts and dashboards
///
/// `events_by_year` uses a `BTreeMap` so years serialize in ascending order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total_events: usize,
    pub events_by_year: BTreeMap<i32, usize>,
    pub events_by_category: BTreeMap<Category, usize>,
    pub year_range: YearRange,
}
