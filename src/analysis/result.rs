//! The seven-field analysis produced by the model.

use serde::{Deserialize, Serialize};

/// JSON keys the model is asked to produce, in schema order.
pub const RESULT_FIELDS: [&str; 7] = [
    "summary",
    "technicalOverview",
    "architectureExplanation",
    "featureBreakdown",
    "scalabilityNotes",
    "risks",
    "portfolioDescription",
];

/// Structured analysis of a repository. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResult {
    pub summary: String,
    pub technical_overview: String,
    pub architecture_explanation: String,
    pub feature_breakdown: String,
    pub scalability_notes: String,
    pub risks: String,
    pub portfolio_description: String,
}

impl StructuredResult {
    /// Mutable slot for a JSON key from [`RESULT_FIELDS`].
    pub(crate) fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "summary" => &mut self.summary,
            "technicalOverview" => &mut self.technical_overview,
            "architectureExplanation" => &mut self.architecture_explanation,
            "featureBreakdown" => &mut self.feature_breakdown,
            "scalabilityNotes" => &mut self.scalability_notes,
            "risks" => &mut self.risks,
            "portfolioDescription" => &mut self.portfolio_description,
            _ => return None,
        })
    }

    /// `(json key, value)` pairs in schema order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            (RESULT_FIELDS[0], &self.summary),
            (RESULT_FIELDS[1], &self.technical_overview),
            (RESULT_FIELDS[2], &self.architecture_explanation),
            (RESULT_FIELDS[3], &self.feature_breakdown),
            (RESULT_FIELDS[4], &self.scalability_notes),
            (RESULT_FIELDS[5], &self.risks),
            (RESULT_FIELDS[6], &self.portfolio_description),
        ]
    }
}
