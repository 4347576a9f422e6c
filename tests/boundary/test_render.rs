//! Tests for status codes and caller-facing error messages.

use kodegen_tools_repo_analysis::analysis::{AnalysisError, Resource, UpstreamError};
use kodegen_tools_repo_analysis::boundary::{
    GENERIC_FAILURE_MESSAGE, LIMIT_REACHED_MESSAGE, is_quota_message, render, status_code,
    user_message,
};
use kodegen_tools_repo_analysis::config::AppEnv;
use kodegen_tools_repo_analysis::gemini::GeminiError;
use kodegen_tools_repo_analysis::github::GitHubError;
use kodegen_tools_repo_analysis::validation::ValidationError;

fn gemini(status: u16, body: &str) -> AnalysisError {
    AnalysisError::from(GeminiError::Api {
        status,
        body: body.to_string(),
    })
}

#[test]
fn test_status_codes() {
    assert_eq!(status_code(&AnalysisError::NotFound(Resource::Analysis)), 404);
    assert_eq!(status_code(&AnalysisError::Unauthorized), 403);
    assert_eq!(
        status_code(&AnalysisError::InvalidUrl("x".to_string())),
        400
    );
    assert_eq!(
        status_code(&AnalysisError::Validation(ValidationError::new("id", "Invalid ID"))),
        400
    );
    assert_eq!(
        status_code(&AnalysisError::InvalidModelOutput("no JSON".to_string())),
        500
    );
    assert_eq!(status_code(&gemini(500, "internal")), 500);
    assert_eq!(
        status_code(&AnalysisError::Upstream(UpstreamError::GitHub(
            GitHubError::NotFound("octocat/missing".to_string())
        ))),
        404
    );
}

#[test]
fn test_quota_markers() {
    assert!(is_quota_message("You exceeded your current quota"));
    assert!(is_quota_message("Gemini API error (429): slow down"));
    assert!(is_quota_message("status: RESOURCE_EXHAUSTED"));
    assert!(is_quota_message("Resource exhausted"));
    assert!(is_quota_message("secondary Rate Limit hit"));
    assert!(!is_quota_message("Repository not found"));
}

#[test]
fn test_quota_errors_get_limit_message_in_every_env() {
    let err = gemini(429, "{\"error\":{\"status\":\"RESOURCE_EXHAUSTED\"}}");
    assert_eq!(status_code(&err), 429);
    for env in [AppEnv::Development, AppEnv::Production] {
        assert_eq!(user_message(&err, env), LIMIT_REACHED_MESSAGE);
    }
}

#[test]
fn test_quota_marker_outside_upstream_is_not_a_quota_error() {
    let err = AnalysisError::InvalidModelOutput("quota".to_string());
    assert_eq!(status_code(&err), 500);
}

#[test]
fn test_payload_messages_are_masked_outside_development() {
    let err = gemini(500, "{\"error\":{\"code\":500,\"message\":\"internal\"}}");

    assert_eq!(user_message(&err, AppEnv::Production), GENERIC_FAILURE_MESSAGE);
    assert!(user_message(&err, AppEnv::Development).contains("\"code\":500"));
}

#[test]
fn test_long_messages_are_masked_outside_development() {
    let err = AnalysisError::InvalidModelOutput("x".repeat(300));

    assert_eq!(user_message(&err, AppEnv::Test), GENERIC_FAILURE_MESSAGE);
    assert_eq!(
        user_message(&err, AppEnv::Development),
        format!("AI returned invalid JSON: {}", "x".repeat(300))
    );
}

#[test]
fn test_short_messages_pass_through() {
    let err = AnalysisError::NotFound(Resource::Repository);
    assert_eq!(user_message(&err, AppEnv::Production), "Repository not found");
}

#[test]
fn test_render_body() {
    let (status, body) = render(&AnalysisError::Unauthorized, AppEnv::Production);
    assert_eq!(status, 403);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "success": false, "error": "Unauthorized" })
    );
}
