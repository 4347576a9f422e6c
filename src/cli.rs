//! Command line of the local runner.

use crate::analysis::{AnalysisOptions, LanguageCode};
use crate::validation;
use clap::Parser;

/// Register a GitHub repository and print an AI-generated analysis of it.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "kodegen-repo-analysis", version, about)]
pub struct Cli {
    /// Repository URL, e.g. https://github.com/owner/repo
    #[arg(value_parser = validation::repo_url)]
    pub repo_url: String,

    /// Output language: en, hi, hry, bho, es, fr, de, pt or ja
    #[arg(value_parser = validation::language)]
    pub language: Option<LanguageCode>,

    /// Email of the local account the run is recorded under
    #[arg(long, env = "KODEGEN_EMAIL", default_value = "local@kodegen.ai")]
    pub email: String,
}

impl Cli {
    #[must_use]
    pub fn analysis_options(&self) -> AnalysisOptions {
        match self.language {
            Some(language) => AnalysisOptions::in_language(language),
            None => AnalysisOptions::default(),
        }
    }
}
