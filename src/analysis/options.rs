//! Per-run analysis options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output languages the analysis can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Hi,
    Hry,
    Bho,
    Es,
    Fr,
    De,
    Pt,
    Ja,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 9] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Hry,
        LanguageCode::Bho,
        LanguageCode::Es,
        LanguageCode::Fr,
        LanguageCode::De,
        LanguageCode::Pt,
        LanguageCode::Ja,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Hry => "hry",
            LanguageCode::Bho => "bho",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
            LanguageCode::Pt => "pt",
            LanguageCode::Ja => "ja",
        }
    }

    /// English name of the language, as written into prompts.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Hi => "Hindi",
            LanguageCode::Hry => "Haryanvi",
            LanguageCode::Bho => "Bhojpuri",
            LanguageCode::Es => "Spanish",
            LanguageCode::Fr => "French",
            LanguageCode::De => "German",
            LanguageCode::Pt => "Portuguese",
            LanguageCode::Ja => "Japanese",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Options accepted by `run_analysis`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Language of the generated text; English when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
}

impl AnalysisOptions {
    #[must_use]
    pub fn in_language(language: LanguageCode) -> Self {
        Self {
            language: Some(language),
        }
    }
}
