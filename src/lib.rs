//! `kodegen_repo_analysis` - AI analyses of GitHub repositories
//!
//! Registers repositories for a user, gathers repository signals through
//! octocrab (metadata, file tree, languages, manifest), asks a Gemini model
//! for a seven-field structured analysis, and stores the result behind
//! ownership checks and optional public share links.

// Module declarations
pub mod analysis;
pub mod auth;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod gemini;
pub mod github;
pub mod runtime;
pub mod store;
pub mod validation;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export remote client types
pub use gemini::{GeminiClient, GeminiClientBuilder, GeminiError, GeminiResult};
pub use github::{GitHubClient, GitHubClientBuilder, GitHubError, GitHubResult, RepoSlug};

// Re-export the analysis core
pub use analysis::{
    AnalysisError, AnalysisOptions, AnalysisResult, AnalysisService, LanguageCode, QuestionAnswer,
    RegisteredRepository, RepositoryOverview, RepositoryService, ShareLink, SignalSource,
    StructuredResult, TextGenerator,
};

// Re-export store types
pub use store::{AnalysisRecord, MemoryStore, RecordId, RepositoryRecord, Store, UserId};

pub use auth::{AuthError, AuthService, TokenPair};
pub use config::{AppConfig, AppEnv, ConfigError};
