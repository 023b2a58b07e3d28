//! Keyword heuristics for harvested free text
//!
//! Best-effort classification of scraped candidates; first matching
//! category wins, and unmatched text lands in `Other`.

use crate::types::Category;

/// Category keyword table, checked in order
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Research,
        &[
            "paper",
            "published",
            "introduced",
            "proposed",
            "study",
            "research",
            "algorithm",
            "method",
        ],
    ),
    (
        Category::Model,
        &[
            "model",
            "released",
            "launched model",
            "gpt",
            "bert",
            "llm",
            "neural network",
            "trained",
        ],
    ),
    (
        Category::Company,
        &[
            "founded",
            "acquired",
            "company",
            "startup",
            "incorporated",
            "merger",
        ],
    ),
    (
        Category::Product,
        &[
            "launched",
            "released",
            "app",
            "service",
            "platform",
            "integration",
            "product",
            "available",
        ],
    ),
    (
        Category::Hardware,
        &["gpu", "chip", "tpu", "processor", "hardware", "nvidia", "compute"],
    ),
    (
        Category::Regulation,
        &[
            "law",
            "regulation",
            "act",
            "policy",
            "ban",
            "rule",
            "government",
            "executive order",
        ],
    ),
    (
        Category::Milestone,
        &[
            "first",
            "record",
            "breakthrough",
            "defeated",
            "achieved",
            "won",
            "surpassed",
        ],
    ),
];

/// Keywords that mark a high-signal (importance 5) event
const HIGH_SIGNAL: &[&str] = &[
    "first",
    "breakthrough",
    "revolutionary",
    "landmark",
    "major",
    "world champion",
    "billion",
    "transformer",
    "gpt",
    "chatgpt",
];

/// Keywords that mark a medium-signal (importance 3) event
const MEDIUM_SIGNAL: &[&str] = &["introduced", "released", "launched", "new", "improved"];

/// Guess the category of free text by first keyword match
pub fn guess_category(text: &str) -> Category {
    let lower = text.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *category;
        }
    }
    Category::Other
}

/// Estimate importance from free text: 5 on any high-signal keyword,
/// else 3 on any medium-signal keyword, else 2
pub fn guess_importance(text: &str) -> i32 {
    let lower = text.to_lowercase();
    if HIGH_SIGNAL.iter().any(|kw| lower.contains(kw)) {
        return 5;
    }
    if MEDIUM_SIGNAL.iter().any(|kw| lower.contains(kw)) {
        return 3;
    }
    2
}
