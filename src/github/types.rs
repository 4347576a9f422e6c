//! Repository signal types returned by the GitHub operations.

use serde::{Deserialize, Serialize};

/// Branch used when GitHub does not report a default branch.
pub const FALLBACK_DEFAULT_BRANCH: &str = "main";

/// Identity of a repository as reported by GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryMetadata {
    pub full_name: String,
    pub default_branch: String,
}

/// One entry of a recursive git tree listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    /// Git object type: `tree` for directories, `blob` for files, `commit`
    /// for submodules.
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl TreeEntry {
    pub fn new(path: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entry_type: entry_type.into(),
        }
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.entry_type == "tree"
    }
}

/// Language name to byte count, in the order GitHub returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageHistogram(Vec<(String, u64)>);

impl LanguageHistogram {
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, u64)>) -> Self {
        Self(pairs)
    }

    /// Language names only, preserving order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
