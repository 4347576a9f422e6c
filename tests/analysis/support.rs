//! Fakes for the remote seams, backed by a `MemoryStore`.

use futures::future::BoxFuture;
use kodegen_tools_repo_analysis::analysis::{SignalSource, TextGenerator};
use kodegen_tools_repo_analysis::gemini::{GeminiError, GeminiResult};
use kodegen_tools_repo_analysis::github::{
    GitHubError, GitHubResult, LanguageHistogram, RepoSlug, RepositoryMetadata, TreeEntry,
};
use kodegen_tools_repo_analysis::store::{
    MemoryStore, NewUser, RepositoryRecord, Store, UserRecord,
};
use kodegen_tools_repo_analysis::{AnalysisService, RepositoryService};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const REPO_URL: &str = "https://github.com/octocat/hello-world";

pub const VALID_OUTPUT: &str = r#"{
  "summary": "A greeting service",
  "technicalOverview": "TypeScript on Node",
  "architectureExplanation": "Single module",
  "featureBreakdown": "Says hello",
  "scalabilityNotes": "Stateless",
  "risks": "None known",
  "portfolioDescription": "Hello world, done well"
}"#;

/// Canned source-hosting responses.
pub struct FakeSource {
    pub metadata: RepositoryMetadata,
    pub tree: Vec<TreeEntry>,
    pub languages: LanguageHistogram,
    pub manifest: Option<String>,
    pub manifest_error: bool,
    pub tree_error: Option<String>,
    pub metadata_calls: AtomicUsize,
}

impl Default for FakeSource {
    fn default() -> Self {
        Self {
            metadata: RepositoryMetadata {
                full_name: "octocat/hello-world".to_string(),
                default_branch: "trunk".to_string(),
            },
            tree: vec![
                TreeEntry::new("src", "tree"),
                TreeEntry::new("src/index.ts", "blob"),
                TreeEntry::new("package.json", "blob"),
            ],
            languages: LanguageHistogram::from_pairs(vec![
                ("TypeScript".to_string(), 9000),
                ("Shell".to_string(), 120),
            ]),
            manifest: Some(r#"{"name":"hello-world"}"#.to_string()),
            manifest_error: false,
            tree_error: None,
            metadata_calls: AtomicUsize::new(0),
        }
    }
}

impl SignalSource for FakeSource {
    fn repository_metadata<'a>(
        &'a self,
        _slug: &'a RepoSlug,
    ) -> BoxFuture<'a, GitHubResult<RepositoryMetadata>> {
        Box::pin(async move {
            self.metadata_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.metadata.clone())
        })
    }

    fn file_tree<'a>(
        &'a self,
        _slug: &'a RepoSlug,
        _branch: &'a str,
    ) -> BoxFuture<'a, GitHubResult<Vec<TreeEntry>>> {
        Box::pin(async move {
            match &self.tree_error {
                Some(message) => Err(GitHubError::ClientSetup(message.clone())),
                None => Ok(self.tree.clone()),
            }
        })
    }

    fn languages<'a>(
        &'a self,
        _slug: &'a RepoSlug,
    ) -> BoxFuture<'a, GitHubResult<LanguageHistogram>> {
        Box::pin(async move { Ok(self.languages.clone()) })
    }

    fn file_text<'a>(
        &'a self,
        _slug: &'a RepoSlug,
        _path: &'a str,
        _reference: &'a str,
    ) -> BoxFuture<'a, GitHubResult<Option<String>>> {
        Box::pin(async move {
            if self.manifest_error {
                Err(GitHubError::ClientSetup("boom".to_string()))
            } else {
                Ok(self.manifest.clone())
            }
        })
    }
}

/// Replays queued responses and records every prompt it was given.
#[derive(Default)]
pub struct FakeGenerator {
    responses: Mutex<VecDeque<GeminiResult<String>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(texts: &[&str]) -> Self {
        let generator = Self::default();
        for text in texts {
            generator.push(Ok(text.to_string()));
        }
        generator
    }

    pub fn failing(status: u16, body: &str) -> Self {
        let generator = Self::default();
        generator.push(Err(GeminiError::Api {
            status,
            body: body.to_string(),
        }));
        generator
    }

    pub fn push(&self, response: GeminiResult<String>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl TextGenerator for FakeGenerator {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, GeminiResult<String>> {
        Box::pin(async move {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        })
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub source: Arc<FakeSource>,
    pub generator: Arc<FakeGenerator>,
    pub analyses: AnalysisService,
    pub repositories: RepositoryService,
}

impl Harness {
    pub fn new(source: FakeSource, generator: FakeGenerator) -> Self {
        let store = Arc::new(MemoryStore::new());
        let source = Arc::new(source);
        let generator = Arc::new(generator);
        let analyses = AnalysisService::new(store.clone(), source.clone(), generator.clone());
        let repositories = RepositoryService::new(store.clone(), source.clone());
        Self {
            store,
            source,
            generator,
            analyses,
            repositories,
        }
    }

    pub fn with_outputs(texts: &[&str]) -> Self {
        Self::new(FakeSource::default(), FakeGenerator::replying(texts))
    }

    pub async fn user(&self, email: &str) -> UserRecord {
        self.store
            .insert_user(NewUser {
                email: email.to_string(),
                password_hash: String::new(),
            })
            .await
            .unwrap()
    }

    pub async fn registered(&self, user: &UserRecord) -> RepositoryRecord {
        self.repositories
            .register_repository(&user.id, REPO_URL)
            .await
            .unwrap()
            .repository
    }
}
