use crate::catalog::{Catalog, Category};
use crate::sequence;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPattern {
    pub sequence: String,
    pub support: u64,
}

/// Top `k` patterns of a category among those spanning at least `min_days`
/// days, sorted descending by support. The sort is stable, so ties keep
/// file order. `k = 0` or an unsatisfiable `min_days` yields an empty
/// list, never an error.
pub fn top_k(catalog: &Catalog, category: Category, k: usize, min_days: usize) -> Vec<RankedPattern> {
    let mut ranked: Vec<RankedPattern> = catalog
        .entries_of(category)
        .filter(|(seq, _)| sequence::day_count(seq) >= min_days)
        .map(|(seq, support)| RankedPattern {
            sequence: seq.to_string(),
            support,
        })
        .collect();
    ranked.sort_by(|a, b| b.support.cmp(&a.support));
    ranked.truncate(k);
    ranked
}
