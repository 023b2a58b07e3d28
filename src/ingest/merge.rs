//! Deduplicating merge of harvested candidates into the curated baseline

use std::collections::HashSet;

use crate::types::NewEvent;

/// Deduplication key: year plus the lowercased first 30 characters of the
/// title (character-based, so multi-byte titles never split mid-char)
pub fn dedup_key(event: &NewEvent) -> (i32, String) {
    let prefix: String = event.title.chars().take(30).collect();
    (event.year, prefix.to_lowercase())
}

/// Merge harvested candidates into the curated baseline
///
/// A candidate whose key collides with a curated key is dropped; curated
/// events always win. Surviving candidates are appended and the combined
/// set is sorted chronologically (same key rule as the query engine).
/// Deterministic and idempotent.
pub fn merge(curated: Vec<NewEvent>, harvested: Vec<NewEvent>) -> Vec<NewEvent> {
    let curated_keys: HashSet<(i32, String)> = curated.iter().map(dedup_key).collect();

    let mut merged = curated;
    let mut seen = curated_keys;
    for candidate in harvested {
        let key = dedup_key(&candidate);
        if seen.contains(&key) {
            continue;
        }
        seen.insert(key);
        merged.push(candidate);
    }

    merged.sort_by_key(NewEvent::date_key);
    merged
}
