//! Repository analysis core.
//!
//! Control flow of a run: ownership check, signal fetch, prompt, generation,
//! extraction, persistence.

pub mod access;
pub mod error;
pub mod extract;
pub mod generator;
pub mod options;
pub mod prompt;
pub mod repositories;
pub mod result;
pub mod service;
pub mod share;
pub mod signals;

pub use access::{OwnedAnalysis, OwnedRepository, owned_analysis, owned_repository};
pub use error::{AnalysisError, AnalysisResult, Resource, UpstreamError};
pub use extract::{coerce_to_string, extract_structured_result, locate_json_candidate};
pub use generator::{ANALYSIS_MODEL, TextGenerator};
pub use options::{AnalysisOptions, LanguageCode, UnknownLanguage};
pub use prompt::{MAX_TREE_ENTRIES, OUTPUT_SCHEMA, build_analysis_prompt, build_question_prompt, tree_summary};
pub use repositories::{OVERVIEW_TREE_ENTRIES, RegisteredRepository, RepositoryOverview, RepositoryService};
pub use result::{RESULT_FIELDS, StructuredResult};
pub use service::{AnalysisService, NO_ANSWER, QuestionAnswer};
pub use share::{SHARE_TOKEN_BYTES, ShareLink, new_share_token};
pub use signals::{MANIFEST_PATH, RepositorySignals, SignalSource, gather_signals};
