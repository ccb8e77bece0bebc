//! Longest-keyword-wins classification of transaction descriptions.

use crate::categories::category_table;
use crate::finance::OTHER_CATEGORY;

/// Outcome of classifying one description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: &'static str,
    /// Keyword that won, `None` when falling back to "Other"
    pub keyword: Option<&'static str>,
    /// Character length of the winning keyword
    pub score: usize,
}

/// Classify a description and report which keyword decided it.
///
/// Every keyword contained in the lower-cased description scores its own
/// length; only a strictly higher score replaces the current best, so ties
/// go to whichever category comes first in the table.
pub fn classify_with_score(description: &str) -> Classification {
    let desc = description.to_lowercase();

    let mut best = Classification {
        category: OTHER_CATEGORY,
        keyword: None,
        score: 0,
    };

    for entry in category_table() {
        for &keyword in entry.keywords {
            if !desc.contains(keyword) {
                continue;
            }
            let score = keyword.chars().count();
            if score > best.score {
                best = Classification {
                    category: entry.name,
                    keyword: Some(keyword),
                    score,
                };
            }
        }
    }

    tracing::debug!(description, category = best.category, score = best.score, "classified");
    best
}

/// Category name for a description, "Other" when nothing matches
pub fn classify(description: &str) -> &'static str {
    classify_with_score(description).category
}
