//! Event record and category enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inclusive year bounds for any event
pub const YEAR_MIN: i32 = 1940;
pub const YEAR_MAX: i32 = 2030;

/// Maximum title length in characters
pub const TITLE_MAX: usize = 500;

/// Maximum description length in characters
pub const DESCRIPTION_MAX: usize = 5000;

/// Default importance when a record does not specify one (1=minor, 5=major)
pub const IMPORTANCE_DEFAULT: i32 = 3;

/// Fixed category enumeration for timeline events
///
/// This is a shared contract with the API layer: `GET /api/categories`
/// exposes these values verbatim for client-side filter UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Research,
    Model,
    Company,
    Product,
    Hardware,
    Regulation,
    Milestone,
    Other,
}

impl Category {
    /// All categories, in presentation order
    pub const ALL: [Category; 8] = [
        Category::Research,
        Category::Model,
        Category::Company,
        Category::Product,
        Category::Hardware,
        Category::Regulation,
        Category::Milestone,
        Category::Other,
    ];

    /// Lowercase wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Research => "research",
            Category::Model => "model",
            Category::Company => "company",
            Category::Product => "product",
            Category::Hardware => "hardware",
            Category::Regulation => "regulation",
            Category::Milestone => "milestone",
            Category::Other => "other",
        }
    }

    /// Capitalized label for display (e.g. filter dropdowns)
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Strict parse; unrecognized values fail with `InvalidCategory`
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_importance() -> i32 {
    IMPORTANCE_DEFAULT
}

/// A dated record in the timeline, as stored and served
///
/// `month`/`day` are absent rather than zero when unknown; they compare as 0
/// only inside [`Event::date_key`], so coarser-dated events sort before
/// finer-dated events in the same year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    pub category: Category,
    #[serde(default = "default_importance")]
    pub importance: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Event {
    /// Chronological sort key: absent month/day compare as 0
    pub fn date_key(&self) -> (i32, u32, u32) {
        (self.year, self.month.unwrap_or(0), self.day.unwrap_or(0))
    }

    /// Case-insensitive substring match over title and description
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self
                .description
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(needle_lower)
    }
}

/// An event draft without an id; ids are assigned by the store at insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    pub category: Category,
    #[serde(default = "default_importance")]
    pub importance: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewEvent {
    /// Create a minimal draft with default importance
    pub fn new(title: impl Into<String>, year: i32, category: Category) -> Self {
        Self {
            title: title.into(),
            description: None,
            year,
            month: None,
            day: None,
            category,
            importance: IMPORTANCE_DEFAULT,
            source_url: None,
            image_url: None,
        }
    }

    /// Chronological sort key, same rule as [`Event::date_key`]
    pub fn date_key(&self) -> (i32, u32, u32) {
        (self.year, self.month.unwrap_or(0), self.day.unwrap_or(0))
    }

    /// Validate draft shape before any store write
    ///
    /// Enforces: non-empty bounded title, bounded description, year within
    /// [1940, 2030], month/day ranges, day only alongside month, importance
    /// within [1, 5].
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidEvent("title must not be empty".to_string()));
        }
        if self.title.chars().count() > TITLE_MAX {
            return Err(Error::InvalidEvent(format!(
                "title longer than {} characters",
                TITLE_MAX
            )));
        }
        if let Some(desc) = &self.description {
            if desc.chars().count() > DESCRIPTION_MAX {
                return Err(Error::InvalidEvent(format!(
                    "description longer than {} characters",
                    DESCRIPTION_MAX
                )));
            }
        }
        Error::check_range("year", self.year as i64, YEAR_MIN as i64, YEAR_MAX as i64)?;
        if let Some(month) = self.month {
            Error::check_range("month", month as i64, 1, 12)?;
        }
        if let Some(day) = self.day {
            if self.month.is_none() {
                return Err(Error::InvalidEvent(
                    "day requires a month to be set".to_string(),
                ));
            }
            Error::check_range("day", day as i64, 1, 31)?;
        }
        Error::check_range("importance", self.importance as i64, 1, 5)?;
        Ok(())
    }

    /// Promote a validated draft to a stored event with the given id
    pub fn into_event(self, id: i64) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            year: self.year,
            month: self.month,
            day: self.day,
            category: self.category,
            importance: self.importance,
            source_url: self.source_url,
            image_url: self.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
        assert_eq!("Model".parse::<Category>().unwrap(), Category::Model);
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "rocketry".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::InvalidCategory(_)));
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::Research.label(), "Research");
        assert_eq!(Category::Other.label(), "Other");
    }

    #[test]
    fn test_date_key_treats_absent_as_zero() {
        let coarse = NewEvent::new("a", 2022, Category::Model).into_event(1);
        let mut fine = NewEvent::new("b", 2022, Category::Model);
        fine.month = Some(11);
        fine.day = Some(30);
        let fine = fine.into_event(2);
        assert!(coarse.date_key() < fine.date_key());
    }

    #[test]
    fn test_validate_accepts_minimal_draft() {
        assert!(NewEvent::new("Turing Test Proposed", 1950, Category::Research)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let err = NewEvent::new("  ", 1950, Category::Research)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidEvent(_)));
    }

    #[test]
    fn test_validate_rejects_year_out_of_range() {
        let err = NewEvent::new("too early", 1900, Category::Other)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange { param: "year", .. }));
    }

    #[test]
    fn test_validate_rejects_day_without_month() {
        let mut draft = NewEvent::new("dayless", 2020, Category::Model);
        draft.day = Some(15);
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidEvent(_)));
    }

    #[test]
    fn test_validate_rejects_bad_importance() {
        let mut draft = NewEvent::new("loud", 2020, Category::Model);
        draft.importance = 6;
        let err = draft.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRange {
                param: "importance",
                ..
            }
        ));
    }

    #[test]
    fn test_event_search_matches_title_or_description() {
        let mut draft = NewEvent::new("ChatGPT Launched", 2022, Category::Product);
        draft.description = Some("OpenAI launches ChatGPT".to_string());
        let event = draft.into_event(1);
        assert!(event.matches_search("chatgpt"));
        assert!(event.matches_search("openai"));
        assert!(!event.matches_search("dartmouth"));
    }

    #[test]
    fn test_importance_defaults_on_deserialize() {
        let json = r#"{"title": "GANs Introduced", "year": 2014, "category": "research"}"#;
        let draft: NewEvent = serde_json::from_str(json).unwrap();
        assert_eq!(draft.importance, IMPORTANCE_DEFAULT);
        assert!(draft.month.is_none());
    }
}
