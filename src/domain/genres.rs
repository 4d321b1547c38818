use serde::{Deserialize, Serialize};

/// Ordered list of genre tags attached to a venue or an artist.
///
/// At rest the list is a JSON array. Rows written by the old form handler
/// hold a single space-delimited string; those are still decoded by
/// splitting on whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Build from submitted tokens, trimming each and dropping blanks.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .map(|t| t.as_ref().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    /// Decode the persisted column value.
    pub fn from_column(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with('[') {
            if let Ok(tags) = serde_json::from_str::<Vec<String>>(trimmed) {
                return Self::from_tokens(tags);
            }
        }
        Self::from_tokens(trimmed.split_whitespace())
    }

    /// Encode for the persisted column.
    pub fn to_column(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Genres {
    fn from(tags: Vec<String>) -> Self {
        Self::from_tokens(tags)
    }
}
