//! Aggregate statistics over an event set

use std::collections::BTreeMap;

use crate::types::{Event, Stats, YearRange};

/// Derive summary statistics from the given events
///
/// Pure and order-independent: the input order never affects the output
/// beyond the ascending key order of `events_by_year`. `total_events`
/// always equals the input length.
pub fn compute_stats(events: &[Event]) -> Stats {
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    let mut by_category = BTreeMap::new();

    for event in events {
        *by_year.entry(event.year).or_insert(0) += 1;
        *by_category.entry(event.category).or_insert(0) += 1;
    }

    let year_range = YearRange {
        min: by_year.keys().next().copied(),
        max: by_year.keys().next_back().copied(),
    };

    Stats {
        total_events: events.len(),
        events_by_year: by_year,
        events_by_category: by_category,
        year_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, NewEvent};

    fn fixture() -> Vec<Event> {
        vec![
            NewEvent::new("Dartmouth Conference", 1956, Category::Milestone).into_event(1),
            NewEvent::new("ChatGPT Launched", 2022, Category::Product).into_event(2),
            NewEvent::new("GPT-4 Released", 2023, Category::Model).into_event(3),
        ]
    }

    #[test]
    fn test_total_and_year_range() {
        let stats = compute_stats(&fixture());
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.year_range.min, Some(1956));
        assert_eq!(stats.year_range.max, Some(2023));
    }

    #[test]
    fn test_counts_by_year_and_category() {
        let mut events = fixture();
        events.push(NewEvent::new("Claude Released", 2023, Category::Model).into_event(4));
        let stats = compute_stats(&events);
        assert_eq!(stats.events_by_year[&2023], 2);
        assert_eq!(stats.events_by_category[&Category::Model], 2);
        assert_eq!(stats.events_by_category.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_empty_set_has_no_year_range() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.year_range, YearRange::default());
        assert!(stats.events_by_year.is_empty());
    }

    #[test]
    fn test_order_independent() {
        let mut events = fixture();
        let forward = compute_stats(&events);
        events.reverse();
        let backward = compute_stats(&events);
        assert_eq!(forward.total_events, backward.total_events);
        assert_eq!(forward.events_by_year, backward.events_by_year);
        assert_eq!(forward.events_by_category, backward.events_by_category);
    }

    #[test]
    fn test_years_serialize_in_ascending_order() {
        let json = serde_json::to_string(&compute_stats(&fixture())).unwrap();
        let y1956 = json.find("\"1956\"").unwrap();
        let y2023 = json.find("\"2023\"").unwrap();
        assert!(y1956 < y2023);
    }
}
