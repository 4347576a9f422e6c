//! Tolerant extraction of the structured result from model output.
//!
//! Two stages: locating the candidate span never fails, parsing it does.

use crate::analysis::error::{AnalysisError, AnalysisResult};
use crate::analysis::result::{RESULT_FIELDS, StructuredResult};
use serde_json::Value;

/// The span from the first `{` to the last `}` of the trimmed text, or `{}`
/// when there is no such well-ordered pair.
#[must_use]
pub fn locate_json_candidate(raw: &str) -> &str {
    let trimmed = raw.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => &trimmed[start..=end],
        _ => "{}",
    }
}

/// String form of a JSON value. Absent and null become empty strings.
#[must_use]
pub fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_to_string(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(object @ Value::Object(_)) => object.to_string(),
    }
}

/// Parse raw model text into a [`StructuredResult`].
///
/// Fails with `InvalidModelOutput` only when the candidate span is not JSON.
/// Missing or mistyped fields are coerced rather than rejected.
pub fn extract_structured_result(raw: &str) -> AnalysisResult<StructuredResult> {
    let candidate = locate_json_candidate(raw);
    let parsed: Value = serde_json::from_str(candidate)
        .map_err(|e| AnalysisError::InvalidModelOutput(e.to_string()))?;

    let mut result = StructuredResult::default();
    for key in RESULT_FIELDS {
        if let Some(slot) = result.field_mut(key) {
            *slot = coerce_to_string(parsed.get(key));
        }
    }
    Ok(result)
}
