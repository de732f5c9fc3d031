use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("failed to read glossary {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("glossary is not a JSON object of string descriptions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static lookup table mapping activity tokens to human-readable
/// descriptions. Domain metadata supplied as configuration, not derived
/// from the pattern data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Glossary(BTreeMap<String, String>);

impl Glossary {
    pub fn from_pairs<K: Into<String>, V: Into<String>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Glossary {
        Glossary(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Parse a JSON object of `token -> description` strings.
    pub fn from_json_str(json: &str) -> Result<Glossary, GlossaryError> {
        Ok(Glossary(serde_json::from_str(json)?))
    }

    pub fn from_file(path: &Path) -> Result<Glossary, GlossaryError> {
        let text = fs::read_to_string(path).map_err(|source| GlossaryError::Io {
            file: path.display().to_string(),
            source,
        })?;
        Glossary::from_json_str(&text)
    }

    pub fn describe(&self, activity: &str) -> Option<&str> {
        self.0.get(activity).map(|s| s.as_str())
    }

    /// Entries in ascending token order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
