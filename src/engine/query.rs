//! Multi-predicate filtering, deterministic ordering, and limiting

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Category, Event, YEAR_MAX, YEAR_MIN};

/// Default result cap when the caller does not specify a limit
pub const LIMIT_DEFAULT: usize = 500;

/// Largest accepted limit
pub const LIMIT_MAX: usize = 1000;

fn default_limit() -> usize {
    LIMIT_DEFAULT
}

/// Filter criteria for an event query
///
/// All predicates are optional and combine conjunctively. `limit` truncates
/// the final ordered result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criteria {
    pub category: Option<Category>,
    /// Keep events with `importance >= min_importance` (1..=5)
    pub min_importance: Option<i32>,
    /// Keep events with `year >= year_from` (>= 1940)
    pub year_from: Option<i32>,
    /// Keep events with `year <= year_to` (<= 2030)
    pub year_to: Option<i32>,
    /// Case-insensitive substring match over title or description
    pub search: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            category: None,
            min_importance: None,
            year_from: None,
            year_to: None,
            search: None,
            limit: LIMIT_DEFAULT,
        }
    }
}

impl Criteria {
    /// Criteria matching everything, with the default limit
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_min_importance(mut self, min_importance: i32) -> Self {
        self.min_importance = Some(min_importance);
        self
    }

    pub fn with_years(mut self, year_from: Option<i32>, year_to: Option<i32>) -> Self {
        self.year_from = year_from;
        self.year_to = year_to;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Check every numeric parameter against its documented bound
    ///
    /// Runs before any store access; an out-of-range value fails with
    /// `InvalidRange` and nothing else happens.
    pub fn validate(&self) -> Result<()> {
        if let Some(imp) = self.min_importance {
            Error::check_range("min_importance", imp as i64, 1, 5)?;
        }
        if let Some(from) = self.year_from {
            Error::check_range("year_from", from as i64, YEAR_MIN as i64, YEAR_MAX as i64)?;
        }
        if let Some(to) = self.year_to {
            Error::check_range("year_to", to as i64, YEAR_MIN as i64, YEAR_MAX as i64)?;
        }
        Error::check_range("limit", self.limit as i64, 1, LIMIT_MAX as i64)?;
        Ok(())
    }

    /// True when the event satisfies every present predicate
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_importance {
            if event.importance < min {
                return false;
            }
        }
        if let Some(from) = self.year_from {
            if event.year < from {
                return false;
            }
        }
        if let Some(to) = self.year_to {
            if event.year > to {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !event.matches_search(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Apply criteria to an event set: filter, sort chronologically, limit
///
/// Ordering is ascending by `(year, month-or-0, day-or-0)`; the sort is
/// stable, so ties keep their input order. The limit truncates after
/// sorting. Pure function of its inputs.
pub fn filter_and_sort(events: Vec<Event>, criteria: &Criteria) -> Result<Vec<Event>> {
    criteria.validate()?;

    let mut matched: Vec<Event> = events
        .into_iter()
        .filter(|e| criteria.matches(e))
        .collect();

    matched.sort_by_key(Event::date_key);
    matched.truncate(criteria.limit);

    Ok(matched)
}
