//! End-to-end ingestion pipeline tests: shape, merge, store, query

use std::io::Write;

use aionos::engine::{compute_stats, Criteria};
use aionos::ingest::{merge, Candidate};
use aionos::store::{curated_baseline, EmbeddedStore};
use aionos::{Category, Error, NewEvent};

fn candidate(title: &str, year: i32) -> Candidate {
    Candidate {
        title: title.to_string(),
        description: None,
        year,
        month: None,
        day: None,
        category: None,
        importance: None,
        source_url: Some("https://en.wikipedia.org/wiki/Timeline_of_artificial_intelligence".to_string()),
    }
}

#[test]
fn test_shape_merge_and_serve() {
    let harvested: Vec<NewEvent> = vec![
        // duplicate of a curated entry, must be dropped
        candidate("ChatGPT Launched", 2022),
        // genuinely new, classified from text
        candidate("University study proposed a novel training algorithm", 1995),
    ]
    .into_iter()
    .map(Candidate::shape)
    .collect();

    let baseline = curated_baseline().unwrap();
    let baseline_len = baseline.len();
    let merged = merge(baseline, harvested);
    assert_eq!(merged.len(), baseline_len + 1);

    let store = EmbeddedStore::from_drafts(merged).unwrap();
    let result = store
        .get_all(&Criteria::any().with_years(Some(1995), Some(1995)))
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].category, Category::Research);
    // "study" is neither high- nor medium-signal on its own
    assert_eq!(result[0].importance, 2);
}

#[test]
fn test_merge_then_stats_reflect_new_events() {
    let baseline = curated_baseline().unwrap();
    let harvested = vec![NewEvent::new("Shakey the Robot Demonstrated", 1970, Category::Milestone)];
    let merged = merge(baseline, harvested);

    let store = EmbeddedStore::from_drafts(merged).unwrap();
    let stats = compute_stats(store.events());
    assert_eq!(stats.total_events, store.len());
    assert_eq!(stats.events_by_year[&1970], 1);
}

#[test]
fn test_file_backed_dataset_roundtrip() {
    let drafts = vec![
        NewEvent::new("Logic Theorist Demonstrated", 1956, Category::Research),
        NewEvent::new("MYCIN Expert System", 1972, Category::Research),
    ];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&drafts).unwrap().as_bytes())
        .unwrap();

    let store = EmbeddedStore::from_file(file.path()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get_by_id(2).unwrap().year, 1972);

    let err = store.insert_many().unwrap_err();
    assert!(matches!(err, Error::WriteUnsupported));
}

#[test]
fn test_missing_dataset_file_is_config_error() {
    let err = EmbeddedStore::from_file("/nonexistent/events.json").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
