//! Offline ingestion pipeline
//!
//! Harvested candidate records are shaped into event drafts, merged with the
//! curated baseline (curated always wins on collisions), and bulk-inserted
//! into the store. Nothing here runs on the request path.

mod classify;
mod merge;

pub use classify::{guess_category, guess_importance};
pub use merge::{dedup_key, merge};

use serde::{Deserialize, Serialize};

use crate::types::{Category, NewEvent};

/// A raw harvested record, not yet vetted
///
/// Category and importance may be missing or free-form; shaping fills them
/// in with the keyword heuristics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub importance: Option<i32>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl Candidate {
    /// Shape a raw candidate into an event draft
    ///
    /// An explicit category is parsed leniently: unknown values fall back to
    /// the keyword classifier rather than failing, since harvested text is
    /// of arbitrary quality. Missing importance is estimated from the text.
    pub fn shape(self) -> NewEvent {
        let classifier_text = match &self.description {
            Some(desc) => format!("{} {}", self.title, desc),
            None => self.title.clone(),
        };

        let category = self
            .category
            .as_deref()
            .and_then(|raw| raw.parse::<Category>().ok())
            .unwrap_or_else(|| guess_category(&classifier_text));

        let importance = self
            .importance
            .unwrap_or_else(|| guess_importance(&classifier_text));

        NewEvent {
            title: self.title,
            description: self.description,
            year: self.year,
            month: self.month,
            day: self.day,
            category,
            importance,
            source_url: self.source_url,
            image_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str) -> Candidate {
        Candidate {
            title: title.to_string(),
            description: None,
            year: 2020,
            month: None,
            day: None,
            category: None,
            importance: None,
            source_url: None,
        }
    }

    #[test]
    fn test_shape_keeps_explicit_fields() {
        let mut raw = candidate("GPT-3 Released");
        raw.category = Some("model".to_string());
        raw.importance = Some(5);
        let draft = raw.shape();
        assert_eq!(draft.category, Category::Model);
        assert_eq!(draft.importance, 5);
    }

    #[test]
    fn test_shape_unknown_category_falls_back_to_classifier() {
        let mut raw = candidate("New GPU chip unveiled by Nvidia");
        raw.category = Some("silicon".to_string());
        let draft = raw.shape();
        assert_eq!(draft.category, Category::Hardware);
    }

    #[test]
    fn test_shape_classifies_from_description_too() {
        let mut raw = candidate("Historic match result");
        raw.description = Some("The program defeated the world champion.".to_string());
        let draft = raw.shape();
        assert_eq!(draft.category, Category::Milestone);
    }
}
