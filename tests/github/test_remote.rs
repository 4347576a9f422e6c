//! Tests for GitHub operations against a mock API server.

use kodegen_tools_repo_analysis::github::{GitHubClient, GitHubError, TreeEntry};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::builder()
        .personal_token("test-token")
        .base_uri(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_recursive_tree_resolves_branch_head() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/branches/trunk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "trunk",
            "commit": { "sha": "abc123" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/git/trees/abc123"))
        .and(query_param("recursive", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "abc123",
            "truncated": false,
            "tree": [
                { "path": "src", "type": "tree" },
                { "path": "src/main.rs", "type": "blob" },
                { "type": "blob" },
                { "path": "README.md", "type": "blob" }
            ]
        })))
        .mount(&server)
        .await;

    let tree = client_for(&server)
        .get_recursive_tree("octocat", "hello-world", "trunk")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        tree,
        vec![
            TreeEntry::new("src", "tree"),
            TreeEntry::new("src/main.rs", "blob"),
            TreeEntry::new("README.md", "blob"),
        ]
    );
}

#[tokio::test]
async fn test_languages_keep_response_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/languages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"Shell":12,"Rust":9000,"C":40}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let languages = client_for(&server)
        .list_languages("octocat", "hello-world")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(languages.names().collect::<Vec<_>>(), vec!["Shell", "Rust", "C"]);
}

#[tokio::test]
async fn test_missing_repository_is_reported_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/missing/languages"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_languages("octocat", "missing")
        .await
        .unwrap()
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, GitHubError::NotFound(ref message) if message == "Not Found"));
}

const CONTENTS_PATH: &str = "/repos/octocat/hello-world/contents/package.json";

fn content_item(path: &str, kind: &str, content: &str, encoding: &str) -> serde_json::Value {
    let url = format!("https://api.github.com/repos/octocat/hello-world/contents/{path}");
    json!({
        "name": path.rsplit('/').next().unwrap_or(path),
        "path": path,
        "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
        "size": content.len(),
        "url": url,
        "type": kind,
        "content": content,
        "encoding": encoding,
        "_links": { "self": url }
    })
}

async fn file_text(server: &MockServer) -> Option<String> {
    client_for(server)
        .get_file_text("octocat", "hello-world", "package.json", None)
        .await
        .unwrap()
        .unwrap()
}

async fn serve_contents(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_file_text_is_base64_decoded() {
    let server = MockServer::start().await;
    // GitHub wraps base64 content at 60 columns.
    serve_contents(
        &server,
        content_item(
            "package.json",
            "file",
            "eyJuYW1lIjoiaGVsbG8t\nd29ybGQifQ==\n",
            "base64",
        ),
    )
    .await;

    assert_eq!(
        file_text(&server).await.as_deref(),
        Some(r#"{"name":"hello-world"}"#)
    );
}

#[tokio::test]
async fn test_file_text_passes_the_ref() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .and(query_param("ref", "trunk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_item(
            "package.json",
            "file",
            "e30=",
            "base64",
        )))
        .mount(&server)
        .await;

    let text = client_for(&server)
        .get_file_text("octocat", "hello-world", "package.json", Some("trunk".to_string()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(text.as_deref(), Some("{}"));
}

#[tokio::test]
async fn test_file_without_inline_content_is_none() {
    let server = MockServer::start().await;
    // Files over 1 MB come back with empty content and encoding "none".
    serve_contents(&server, content_item("package.json", "file", "", "none")).await;

    assert_eq!(file_text(&server).await, None);
}

#[tokio::test]
async fn test_directory_listing_is_none() {
    let server = MockServer::start().await;
    serve_contents(
        &server,
        json!([
            content_item("package.json/a.json", "file", "e30=", "base64"),
            content_item("package.json/b.json", "file", "e30=", "base64"),
        ]),
    )
    .await;

    assert_eq!(file_text(&server).await, None);
}

#[tokio::test]
async fn test_non_file_entry_is_none() {
    let server = MockServer::start().await;
    serve_contents(
        &server,
        content_item("package.json", "symlink", "e30=", "base64"),
    )
    .await;

    assert_eq!(file_text(&server).await, None);
}

#[tokio::test]
async fn test_undecodable_content_is_none() {
    let server = MockServer::start().await;
    serve_contents(
        &server,
        content_item("package.json", "file", "not*base64!", "base64"),
    )
    .await;

    assert_eq!(file_text(&server).await, None);
}

#[tokio::test]
async fn test_non_utf8_content_is_none() {
    let server = MockServer::start().await;
    // 0xff 0xfe 0xfd
    serve_contents(&server, content_item("package.json", "file", "//79", "base64")).await;

    assert_eq!(file_text(&server).await, None);
}

#[tokio::test]
async fn test_metadata_falls_back_to_main_branch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1296269,
            "name": "hello-world",
            "url": "https://api.github.com/repos/octocat/hello-world"
        })))
        .mount(&server)
        .await;

    let metadata = client_for(&server)
        .get_repository_metadata("octocat", "hello-world")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(metadata.full_name, "octocat/hello-world");
    assert_eq!(metadata.default_branch, "main");
}

#[tokio::test]
async fn test_metadata_uses_reported_default_branch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "default_branch": "trunk",
            "url": "https://api.github.com/repos/octocat/Hello-World"
        })))
        .mount(&server)
        .await;

    let metadata = client_for(&server)
        .get_repository_metadata("octocat", "hello-world")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(metadata.full_name, "octocat/Hello-World");
    assert_eq!(metadata.default_branch, "trunk");
}

#[tokio::test]
async fn test_branch_name_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/branches/release%231"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "release#1",
            "commit": { "sha": "def456" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/git/trees/def456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "def456",
            "tree": [{ "path": "README.md", "type": "blob" }]
        })))
        .mount(&server)
        .await;

    let tree = client_for(&server)
        .get_recursive_tree("octocat", "hello-world", "release#1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tree, vec![TreeEntry::new("README.md", "blob")]);
}
