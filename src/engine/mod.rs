//! Query engine and aggregator
//!
//! Pure functions over event sets; no shared mutable state, safe to call
//! concurrently from any number of request handlers. The embedded store
//! delegates to [`filter_and_sort`] wholesale; the external store translates
//! the same criteria into native predicates and re-sorts with the same key,
//! so both backends exhibit identical query semantics.

mod query;
mod stats;

pub use query::{filter_and_sort, Criteria, LIMIT_DEFAULT, LIMIT_MAX};
pub use stats::compute_stats;
