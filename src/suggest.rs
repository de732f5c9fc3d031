use crate::catalog::{Catalog, Category};
use serde::Serialize;

pub const DEFAULT_LIMIT: usize = 3;

/// A catalog pattern extending the candidate by literal continuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub sequence: String,
    pub category: Category,
    pub support: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome")]
pub enum SuggestionOutcome {
    Suggestions { suggestions: Vec<Suggestion> },
    /// No favorable pattern extends the candidate.
    NoImprovementPath,
}

/// Superset patterns in the favorable categories (Distinction, Pass) that
/// contain the candidate as a contiguous substring of the normalized string
/// form and are not identical to it. Matches are pooled across categories
/// in declaration order, sorted descending by support, and capped at
/// `limit`.
///
/// The containment test is deliberately textual: the intent is a pattern
/// that extends the candidate by literal continuation, not general
/// subsequence containment.
pub fn suggest(candidate: &str, catalog: &Catalog, limit: usize) -> SuggestionOutcome {
    let mut pooled: Vec<Suggestion> = Vec::new();
    for category in Category::FAVORABLE {
        for (seq, support) in catalog.entries_of(category) {
            if seq.contains(candidate) && seq != candidate {
                pooled.push(Suggestion {
                    sequence: seq.to_string(),
                    category,
                    support,
                });
            }
        }
    }
    if pooled.is_empty() {
        return SuggestionOutcome::NoImprovementPath;
    }
    pooled.sort_by(|a, b| b.support.cmp(&a.support));
    pooled.truncate(limit);
    SuggestionOutcome::Suggestions {
        suggestions: pooled,
    }
}
