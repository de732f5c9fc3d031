use crate::sequence;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome categories, in documented iteration order. Classification
/// tie-breaks and suggestion pooling depend on this order being stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Distinction,
    Pass,
    Fail,
    Withdrawn,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Distinction,
        Category::Pass,
        Category::Fail,
        Category::Withdrawn,
    ];

    /// Categories considered an improvement target.
    pub const FAVORABLE: [Category; 2] = [Category::Distinction, Category::Pass];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Distinction => "Distinction",
            Category::Pass => "Pass",
            Category::Fail => "Fail",
            Category::Withdrawn => "Withdrawn",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{file}:{line_number}: missing ' #SUP: ' separator in record: {line}")]
    MalformedRecord {
        file: String,
        line_number: usize,
        line: String,
    },
    #[error("{file}:{line_number}: support count is not a non-negative integer: {value}")]
    BadSupportCount {
        file: String,
        line_number: usize,
        value: String,
    },
    #[error("missing pattern file for category {category}: {}", path.display())]
    MissingCategoryFile { category: Category, path: PathBuf },
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// Literal record separator: exactly one space on each side of `#SUP:`.
const SUPPORT_SEPARATOR: &str = " #SUP: ";

/// One category's mined patterns, keyed by normalized sequence string.
/// File order is preserved for iteration; a duplicate key keeps its first
/// position and overwrites the support (last write wins).
#[derive(Debug, Default)]
struct CategoryPatterns {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl CategoryPatterns {
    fn insert(&mut self, sequence: String, support: u64) {
        match self.index.get(&sequence) {
            Some(&pos) => self.entries[pos].1 = support,
            None => {
                self.index.insert(sequence.clone(), self.entries.len());
                self.entries.push((sequence, support));
            }
        }
    }
}

/// In-memory index of mined patterns across all categories. Built once by
/// bulk load, read-only afterwards.
#[derive(Debug)]
pub struct Catalog {
    patterns: [CategoryPatterns; 4],
    activities: Vec<String>,
}

impl Catalog {
    /// Load one pattern file per category. A missing file or any malformed
    /// record aborts the whole load.
    pub fn load(files: &CategoryFiles) -> Result<Catalog, CatalogError> {
        let mut patterns: [CategoryPatterns; 4] = Default::default();
        for (slot, category) in patterns.iter_mut().zip(Category::ALL) {
            let path = files.path(category);
            if !path.is_file() {
                return Err(CatalogError::MissingCategoryFile {
                    category,
                    path: path.to_path_buf(),
                });
            }
            let file = path.display().to_string();
            let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
                file: file.clone(),
                source,
            })?;
            for (i, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let (sequence, support) = parse_record(line, &file, i + 1)?;
                slot.insert(sequence, support);
            }
        }
        let activities = collect_activities(&patterns);
        Ok(Catalog {
            patterns,
            activities,
        })
    }

    /// Build a catalog from in-memory records, one `(sequence, support)`
    /// list per category in `Category::ALL` order.
    pub fn from_records<S: Into<String>>(
        records: [Vec<(S, u64)>; 4],
    ) -> Catalog {
        let mut patterns: [CategoryPatterns; 4] = Default::default();
        for (slot, recs) in patterns.iter_mut().zip(records) {
            for (seq, sup) in recs {
                let seq: String = seq.into();
                slot.insert(sequence::normalize(&seq), sup);
            }
        }
        let activities = collect_activities(&patterns);
        Catalog {
            patterns,
            activities,
        }
    }

    /// Exact-match support count for a normalized sequence, if present.
    pub fn lookup(&self, category: Category, sequence: &str) -> Option<u64> {
        let slot = &self.patterns[category as usize];
        slot.index.get(sequence).map(|&pos| slot.entries[pos].1)
    }

    /// A category's entries in file order.
    pub fn entries_of(&self, category: Category) -> impl Iterator<Item = (&str, u64)> {
        self.patterns[category as usize]
            .entries
            .iter()
            .map(|(seq, sup)| (seq.as_str(), *sup))
    }

    /// Union of every non-sentinel token across all categories, sorted
    /// ascending. Cached at load time.
    pub fn all_activities(&self) -> &[String] {
        &self.activities
    }
}

/// Parse one catalog record of the form `<tokens> #SUP: <integer>`. The
/// sequence side is normalized into canonical key form.
fn parse_record(
    line: &str,
    file: &str,
    line_number: usize,
) -> Result<(String, u64), CatalogError> {
    let trimmed = line.trim_end();
    let (seq, sup) =
        trimmed
            .split_once(SUPPORT_SEPARATOR)
            .ok_or_else(|| CatalogError::MalformedRecord {
                file: file.to_string(),
                line_number,
                line: trimmed.to_string(),
            })?;
    let support = sup
        .trim()
        .parse::<u64>()
        .map_err(|_| CatalogError::BadSupportCount {
            file: file.to_string(),
            line_number,
            value: sup.trim().to_string(),
        })?;
    Ok((sequence::normalize(seq), support))
}

fn collect_activities(patterns: &[CategoryPatterns; 4]) -> Vec<String> {
    use itertools::Itertools;
    patterns
        .iter()
        .flat_map(|p| p.entries.iter())
        .flat_map(|(seq, _)| seq.split_whitespace())
        .filter(|tok| *tok != sequence::SENTINEL)
        .map(|tok| tok.to_string())
        .sorted()
        .dedup()
        .collect()
}

/// Locations of the four required category pattern files.
#[derive(Debug, Clone)]
pub struct CategoryFiles {
    pub distinction: PathBuf,
    pub pass: PathBuf,
    pub fail: PathBuf,
    pub withdrawn: PathBuf,
}

impl CategoryFiles {
    fn path(&self, category: Category) -> &Path {
        match category {
            Category::Distinction => &self.distinction,
            Category::Pass => &self.pass,
            Category::Fail => &self.fail,
            Category::Withdrawn => &self.withdrawn,
        }
    }
}
