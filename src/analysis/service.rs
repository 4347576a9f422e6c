//! Analysis orchestration and access-controlled analysis records.

use crate::analysis::access::{owned_analysis, owned_repository};
use crate::analysis::error::{AnalysisError, AnalysisResult, Resource};
use crate::analysis::extract::extract_structured_result;
use crate::analysis::generator::TextGenerator;
use crate::analysis::options::AnalysisOptions;
use crate::analysis::prompt::{build_analysis_prompt, build_question_prompt};
use crate::analysis::share::{ShareLink, new_share_token};
use crate::analysis::signals::{SignalSource, gather_signals};
use crate::store::{AnalysisRecord, NewAnalysis, RecordId, ShareGrant, Store, UserId};
use crate::validation;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Answer text used when the model returns nothing for a question.
pub const NO_ANSWER: &str = "No answer could be generated for this question.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub analysis_id: RecordId,
    pub question: String,
    pub answer: String,
}

/// Runs analyses and guards access to their records.
///
/// Holds the process-wide store and remote clients; cloning shares them.
#[derive(Clone)]
pub struct AnalysisService {
    store: Arc<dyn Store>,
    signals: Arc<dyn SignalSource>,
    generator: Arc<dyn TextGenerator>,
}

impl AnalysisService {
    pub fn new(
        store: Arc<dyn Store>,
        signals: Arc<dyn SignalSource>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            store,
            signals,
            generator,
        }
    }

    /// Fetch signals, prompt the model, store the parsed result and stamp the
    /// repository's `analyzed_at`.
    ///
    /// Every run creates a new record; earlier runs stay in the history.
    pub async fn run_analysis(
        &self,
        repository_id: &RecordId,
        user_id: &UserId,
        options: &AnalysisOptions,
    ) -> AnalysisResult<AnalysisRecord> {
        let owned = owned_repository(self.store.as_ref(), repository_id, user_id).await?;
        let repository = owned.record();
        log::info!(
            "analysis started for repository {repository_id} ({})",
            repository.repo_name
        );

        let signals = gather_signals(self.signals.as_ref(), &repository.repo_url).await?;
        let prompt = build_analysis_prompt(&signals, options.language);
        let raw = self.generator.generate(&prompt).await?;
        let structured_result = extract_structured_result(&raw)?;

        let analysis = self
            .store
            .insert_analysis(NewAnalysis {
                repository_id: repository_id.clone(),
                structured_result,
            })
            .await?;
        self.store
            .set_repository_analyzed_at(repository_id, Utc::now())
            .await?;

        log::info!(
            "analysis {} stored for repository {repository_id}",
            analysis.id
        );
        Ok(analysis)
    }

    /// Most recent analysis of a repository the caller owns.
    pub async fn get_analysis_by_repository_id(
        &self,
        repository_id: &RecordId,
        user_id: &UserId,
    ) -> AnalysisResult<AnalysisRecord> {
        owned_repository(self.store.as_ref(), repository_id, user_id).await?;
        self.store
            .latest_analysis(repository_id)
            .await?
            .ok_or(AnalysisError::NotFound(Resource::Analysis))
    }

    /// All analyses of a repository the caller owns, newest first.
    pub async fn list_analyses_by_repository_id(
        &self,
        repository_id: &RecordId,
        user_id: &UserId,
    ) -> AnalysisResult<Vec<AnalysisRecord>> {
        owned_repository(self.store.as_ref(), repository_id, user_id).await?;
        Ok(self.store.list_analyses(repository_id).await?)
    }

    pub async fn delete_analysis(
        &self,
        analysis_id: &RecordId,
        user_id: &UserId,
    ) -> AnalysisResult<()> {
        owned_analysis(self.store.as_ref(), analysis_id, user_id).await?;
        if !self.store.delete_analysis(analysis_id).await? {
            return Err(AnalysisError::NotFound(Resource::Analysis));
        }
        log::info!("analysis {analysis_id} deleted");
        Ok(())
    }

    /// Issue a new share token, replacing any previous one.
    ///
    /// `is_public` defaults to `true`. The ownership check and the write are
    /// separate store calls; two concurrent calls may both pass the check and
    /// the later write wins.
    pub async fn generate_share_token(
        &self,
        analysis_id: &RecordId,
        user_id: &UserId,
        is_public: Option<bool>,
    ) -> AnalysisResult<ShareLink> {
        owned_analysis(self.store.as_ref(), analysis_id, user_id).await?;

        let token = new_share_token();
        let grant = ShareGrant {
            token: token.clone(),
            is_public: is_public.unwrap_or(true),
        };
        if !self.store.set_share(analysis_id, Some(grant)).await? {
            return Err(AnalysisError::NotFound(Resource::Analysis));
        }

        log::info!("share link issued for analysis {analysis_id}");
        Ok(ShareLink::new(token))
    }

    /// Public lookup. A token that exists but is not public is reported
    /// exactly like an unknown token.
    pub async fn get_analysis_by_share_token(&self, token: &str) -> AnalysisResult<AnalysisRecord> {
        let token = validation::share_token(token)?;
        self.store
            .find_public_by_share_token(token)
            .await?
            .ok_or(AnalysisError::NotFound(Resource::Analysis))
    }

    /// Clear the share token and public flag together.
    pub async fn revoke_share_token(
        &self,
        analysis_id: &RecordId,
        user_id: &UserId,
    ) -> AnalysisResult<()> {
        owned_analysis(self.store.as_ref(), analysis_id, user_id).await?;
        if !self.store.set_share(analysis_id, None).await? {
            return Err(AnalysisError::NotFound(Resource::Analysis));
        }
        log::info!("share link revoked for analysis {analysis_id}");
        Ok(())
    }

    /// Answer a follow-up question from a stored analysis.
    pub async fn ask_question(
        &self,
        analysis_id: &RecordId,
        user_id: &UserId,
        question: &str,
    ) -> AnalysisResult<QuestionAnswer> {
        let question = validation::question(question)?;
        let owned = owned_analysis(self.store.as_ref(), analysis_id, user_id).await?;

        let prompt = build_question_prompt(
            &owned.repository().repo_name,
            &owned.analysis().structured_result,
            &question,
        );
        let raw = self.generator.generate(&prompt).await?;
        let answer = match raw.trim() {
            "" => NO_ANSWER.to_string(),
            text => text.to_string(),
        };

        Ok(QuestionAnswer {
            analysis_id: analysis_id.clone(),
            question,
            answer,
        })
    }
}
