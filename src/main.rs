// Local runner: register a repository and analyze it once.
//
// Reads GITHUB_TOKEN, GEMINI_API_KEY, JWT_SECRET and JWT_REFRESH_SECRET from
// the environment or a `.env` file. Records live in memory for the duration
// of the run.

use anyhow::{Context, Result, bail};
use clap::Parser;
use kodegen_tools_repo_analysis::cli::Cli;
use kodegen_tools_repo_analysis::config::ENV_FILE;
use kodegen_tools_repo_analysis::{
    AnalysisService, AppConfig, AuthService, GeminiClient, GitHubClient, MemoryStore,
    RepositoryService, Store, boundary,
};
use rand::RngCore;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = cli.analysis_options();

    let config = AppConfig::from_env_and_file(Path::new(ENV_FILE))?;
    log::info!("starting in {} mode", config.env);

    // Remote clients are built once and shared by every service.
    let mut github = GitHubClient::builder().personal_token(config.github_token.clone());
    if let Some(uri) = &config.github_api_url {
        github = github.base_uri(uri);
    }
    let github = Arc::new(github.build().context("Failed to create GitHub client")?);
    let gemini = Arc::new(
        GeminiClient::builder()
            .api_key(config.gemini_api_key.clone())
            .base_url(config.gemini_api_url.clone())
            .build()
            .context("Failed to create Gemini client")?,
    );
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());

    let auth = AuthService::new(store.clone(), &config.jwt_secret, &config.jwt_refresh_secret);
    let repositories = RepositoryService::new(store.clone(), github.clone());
    let analyses = AnalysisService::new(store, github, gemini);

    // The store is fresh, so the local account gets a throwaway password.
    let mut secret = [0u8; 24];
    rand::rng().fill_bytes(&mut secret);
    let password = hex::encode(secret);
    auth.register(&cli.email, &password).await?;
    let tokens = auth.login(&cli.email, &password).await?;
    let bearer = format!("Bearer {}", tokens.access_token);
    let user_id = auth.authenticate(Some(bearer.as_str()))?;

    let registered = repositories
        .register_repository(&user_id, &cli.repo_url)
        .await
        .map_err(|e| anyhow::anyhow!(boundary::user_message(&e, config.env)))?;
    log::info!(
        "{} on {}: {} languages, {} tree entries sampled",
        registered.repository.repo_name,
        registered.metadata.default_branch,
        registered.metadata.languages.len(),
        registered.metadata.file_tree.len()
    );

    match analyses
        .run_analysis(&registered.repository.id, &user_id, &options)
        .await
    {
        Ok(analysis) => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(())
        }
        Err(e) => {
            let (status, body) = boundary::render(&e, config.env);
            log::error!("analysis failed ({status}): {e}");
            bail!(body.error)
        }
    }
}
