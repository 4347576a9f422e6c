//! Prompt construction.

use crate::analysis::options::LanguageCode;
use crate::analysis::result::StructuredResult;
use crate::analysis::signals::{MANIFEST_PATH, RepositorySignals};
use crate::github::TreeEntry;
use std::fmt::Write as _;

/// Hard cap on tree entries rendered into the prompt.
pub const MAX_TREE_ENTRIES: usize = 150;

/// Output schema shown to the model.
pub const OUTPUT_SCHEMA: &str = r#"{
  "summary": "string - plain-language summary of what the project does",
  "technicalOverview": "string - tech stack and high-level technical overview",
  "architectureExplanation": "string - code organization, layers and patterns",
  "featureBreakdown": "string - the main features",
  "scalabilityNotes": "string - scalability considerations",
  "risks": "string - risks, weak spots and suggested improvements",
  "portfolioDescription": "string - a short portfolio-ready description"
}"#;

const MANIFEST_MISSING: &str = "Not found or not applicable";

/// `[dir] path` / `[file] path` lines for the first [`MAX_TREE_ENTRIES`]
/// entries, in tree order.
#[must_use]
pub fn tree_summary(tree: &[TreeEntry]) -> String {
    tree.iter()
        .take(MAX_TREE_ENTRIES)
        .map(|entry| {
            let tag = if entry.is_dir() { "[dir]" } else { "[file]" };
            format!("{tag} {}", entry.path)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn language_instruction(language: Option<LanguageCode>) -> Option<String> {
    match language {
        None | Some(LanguageCode::En) => None,
        Some(code) => Some(format!(
            "Write every string value in {}. Keep the JSON keys exactly as in the schema.",
            code.display_name()
        )),
    }
}

/// Prompt asking for a [`StructuredResult`] as a bare JSON object.
#[must_use]
pub fn build_analysis_prompt(signals: &RepositorySignals, language: Option<LanguageCode>) -> String {
    let languages = signals.languages.names().collect::<Vec<_>>().join(", ");
    let manifest = signals.manifest.as_deref().unwrap_or(MANIFEST_MISSING);

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Analyze this GitHub repository and return ONLY valid JSON matching this schema. \
         No markdown, no code fences, no extra text."
    );
    let _ = writeln!(prompt, "Schema: {OUTPUT_SCHEMA}");
    if let Some(instruction) = language_instruction(language) {
        let _ = writeln!(prompt, "{instruction}");
    }
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Repository: {}", signals.metadata.full_name);
    let _ = writeln!(prompt, "Default branch: {}", signals.metadata.default_branch);
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "File tree (sample):");
    let _ = writeln!(prompt, "{}", tree_summary(&signals.tree));
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Repo stats:");
    let _ = writeln!(prompt, "Languages: {languages}");
    let _ = writeln!(prompt, "Total files in tree: {}", signals.tree.len());
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "{MANIFEST_PATH} content:");
    let _ = writeln!(prompt, "{manifest}");
    let _ = writeln!(prompt);
    let _ = write!(prompt, "Generate the structured analysis. Return ONLY the JSON object.");
    prompt
}

/// Prompt answering a follow-up question from a stored analysis.
#[must_use]
pub fn build_question_prompt(repo_name: &str, result: &StructuredResult, question: &str) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You previously analyzed the GitHub repository {repo_name}. \
         Answer the question below using only that analysis. \
         If the analysis does not cover it, say so briefly. Answer in plain text."
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Analysis:");
    for (key, value) in result.fields() {
        let _ = writeln!(prompt, "{key}: {value}");
    }
    let _ = writeln!(prompt);
    let _ = write!(prompt, "Question: {question}");
    prompt
}
