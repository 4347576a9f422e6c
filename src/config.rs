//! Environment-driven configuration.

use crate::gemini::DEFAULT_BASE_URL;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Minimum length of each JWT signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// Dotenv file read at startup, relative to the working directory.
pub const ENV_FILE: &str = ".env";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl AppEnv {
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, AppEnv::Development)
    }
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            "test" => Ok(AppEnv::Test),
            other => Err(format!(
                "expected one of development, production, test; got '{other}'"
            )),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
            AppEnv::Test => "test",
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),

    #[error("Failed to read {path}: {source}")]
    EnvFile {
        path: String,
        source: dotenvy::Error,
    },
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub env: AppEnv,
    pub jwt_secret: String,
    pub jwt_refresh_secret: String,
    pub github_token: String,
    pub github_api_url: Option<String>,
    pub gemini_api_key: String,
    pub gemini_api_url: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("github_api_url", &self.github_api_url)
            .field("gemini_api_url", &self.gemini_api_url)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Process environment layered over the dotenv file at `path`. A missing
    /// file is not an error.
    pub fn from_env_and_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_lookup_and_file(|key| std::env::var(key).ok(), path)
    }

    /// `lookup` wins over the dotenv file, as `dotenv` never overrides
    /// variables that are already set.
    pub fn from_lookup_and_file<F>(lookup: F, path: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = read_env_file(path)?;
        Self::from_lookup(|key| lookup(key).or_else(|| file.get(key).cloned()))
    }

    /// Build from any key lookup. All problems are reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();
        let value = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let env = match value("APP_ENV") {
            None => AppEnv::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                problems.push(format!("APP_ENV: {e}"));
                AppEnv::default()
            }),
        };

        let mut secret = |key: &str| match value(key) {
            Some(s) if s.len() >= MIN_SECRET_LEN => s,
            Some(_) => {
                problems.push(format!("{key}: must be at least {MIN_SECRET_LEN} characters"));
                String::new()
            }
            None => {
                problems.push(format!("{key}: is required"));
                String::new()
            }
        };
        let jwt_secret = secret("JWT_SECRET");
        let jwt_refresh_secret = secret("JWT_REFRESH_SECRET");

        let mut required = |key: &str| {
            value(key).unwrap_or_else(|| {
                problems.push(format!("{key}: is required"));
                String::new()
            })
        };
        let github_token = required("GITHUB_TOKEN");
        let gemini_api_key = required("GEMINI_API_KEY");

        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems));
        }

        Ok(Self {
            env,
            jwt_secret,
            jwt_refresh_secret,
            github_token,
            github_api_url: value("GITHUB_API_URL"),
            gemini_api_key,
            gemini_api_url: value("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let env_file_error = |source: dotenvy::Error| ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    };

    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => return Err(env_file_error(e)),
    };

    let values = entries
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(env_file_error)?;
    log::debug!("loaded {} entries from {}", values.len(), path.display());
    Ok(values)
}
