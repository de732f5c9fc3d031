use crate::catalog::{Catalog, Category};
use serde::Serialize;

/// One matching category's share of the candidate's total support.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySupport {
    pub category: Category,
    pub support: u64,
    /// Share of the summed matching support, rounded to 2 decimals.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict")]
pub enum Classification {
    /// No category has an exact-match entry for the candidate.
    NoData,
    Classified {
        dominant: Category,
        breakdown: Vec<CategorySupport>,
    },
}

/// Exact-match support distribution of a candidate sequence across all
/// categories. A category without an entry is excluded, not counted as
/// zero. The dominant category is the first-seen maximum support in
/// `Category::ALL` order.
pub fn classify(candidate: &str, catalog: &Catalog) -> Classification {
    let matches: Vec<(Category, u64)> = Category::ALL
        .iter()
        .filter_map(|&cat| catalog.lookup(cat, candidate).map(|sup| (cat, sup)))
        .collect();
    if matches.is_empty() {
        return Classification::NoData;
    }
    let total: u64 = matches.iter().map(|(_, sup)| sup).sum();
    let breakdown: Vec<CategorySupport> = matches
        .iter()
        .map(|&(category, support)| CategorySupport {
            category,
            support,
            percentage: round2(support as f64 / total as f64 * 100.0),
        })
        .collect();
    let dominant = matches
        .iter()
        .fold(matches[0], |best, &cur| {
            if cur.1 > best.1 {
                cur
            } else {
                best
            }
        })
        .0;
    Classification::Classified {
        dominant,
        breakdown,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
