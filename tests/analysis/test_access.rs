//! Tests for ownership checks on analysis mutations.

use super::support::{Harness, VALID_OUTPUT};
use kodegen_tools_repo_analysis::analysis::{AnalysisError, AnalysisOptions, Resource};
use kodegen_tools_repo_analysis::store::{RecordId, Store};

#[tokio::test]
async fn test_owner_can_delete() {
    let h = Harness::with_outputs(&[VALID_OUTPUT]);
    let user = h.user("a@example.com").await;
    let repo = h.registered(&user).await;
    let analysis = h
        .analyses
        .run_analysis(&repo.id, &user.id, &AnalysisOptions::default())
        .await
        .unwrap();

    h.analyses.delete_analysis(&analysis.id, &user.id).await.unwrap();
    assert_eq!(h.store.find_analysis(&analysis.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_foreign_delete_is_unauthorized_and_keeps_record() {
    let h = Harness::with_outputs(&[VALID_OUTPUT]);
    let owner = h.user("owner@example.com").await;
    let intruder = h.user("intruder@example.com").await;
    let repo = h.registered(&owner).await;
    let analysis = h
        .analyses
        .run_analysis(&repo.id, &owner.id, &AnalysisOptions::default())
        .await
        .unwrap();

    let err = h
        .analyses
        .delete_analysis(&analysis.id, &intruder.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Unauthorized));
    assert!(h.store.find_analysis(&analysis.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_of_missing_analysis_is_not_found() {
    let h = Harness::with_outputs(&[]);
    let user = h.user("a@example.com").await;

    let err = h
        .analyses
        .delete_analysis(&RecordId::generate(), &user.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound(Resource::Analysis)));
}

#[tokio::test]
async fn test_reads_of_foreign_repository_look_missing() {
    let h = Harness::with_outputs(&[VALID_OUTPUT]);
    let owner = h.user("owner@example.com").await;
    let intruder = h.user("intruder@example.com").await;
    let repo = h.registered(&owner).await;
    h.analyses
        .run_analysis(&repo.id, &owner.id, &AnalysisOptions::default())
        .await
        .unwrap();

    let latest = h
        .analyses
        .get_analysis_by_repository_id(&repo.id, &intruder.id)
        .await
        .unwrap_err();
    let missing = h
        .analyses
        .get_analysis_by_repository_id(&RecordId::generate(), &intruder.id)
        .await
        .unwrap_err();
    assert_eq!(latest.to_string(), missing.to_string());

    let history = h
        .analyses
        .list_analyses_by_repository_id(&repo.id, &intruder.id)
        .await
        .unwrap_err();
    assert!(matches!(history, AnalysisError::NotFound(Resource::Repository)));
}
