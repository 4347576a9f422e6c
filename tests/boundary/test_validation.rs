//! Tests for input shape validation.

use kodegen_tools_repo_analysis::analysis::LanguageCode;
use kodegen_tools_repo_analysis::validation::{
    MAX_QUESTION_CHARS, MIN_PASSWORD_CHARS, email, language, password, question, record_id,
    repo_url, share_token,
};

#[test]
fn test_record_id() {
    assert!(record_id("id", "0123456789abcdef01234567").is_ok());
    let err = record_id("repositoryId", "nope").unwrap_err();
    assert_eq!(err.field, "repositoryId");
    assert_eq!(err.to_string(), "repositoryId: Invalid ID");
}

#[test]
fn test_repo_url() {
    assert!(repo_url("https://github.com/octocat/hello-world").is_ok());
    assert!(repo_url("http://www.github.com/octocat/hello-world/").is_ok());
    assert!(repo_url("https://github.com/octocat").is_err());
    assert!(repo_url("https://example.com/octocat/hello-world").is_err());
}

#[test]
fn test_repo_url_is_ascii_only() {
    assert!(repo_url("https://github.com/ówner/repo").is_err());
    assert!(repo_url("https://github.com/octocat/répo").is_err());
    assert!(repo_url("https://github.com/octo_cat/hello.world-2").is_ok());
}

#[test]
fn test_email() {
    assert_eq!(email("  a@example.com ").unwrap(), "a@example.com");
    for bad in ["", "a@b", "@example.com", "a b@example.com", "a@example."] {
        let err = email(bad).unwrap_err();
        assert_eq!(err.field, "email", "{bad}");
    }
}

#[test]
fn test_password_length() {
    assert!(password(&"x".repeat(MIN_PASSWORD_CHARS)).is_ok());
    let err = password(&"x".repeat(MIN_PASSWORD_CHARS - 1)).unwrap_err();
    assert_eq!(err.field, "password");
    // Counted in characters, not bytes.
    assert!(password(&"é".repeat(MIN_PASSWORD_CHARS - 1)).is_err());
}

#[test]
fn test_question_bounds() {
    assert_eq!(question("  why?  ").unwrap(), "why?");
    assert!(question("").is_err());
    assert!(question(" \n\t ").is_err());
    assert!(question(&"é".repeat(MAX_QUESTION_CHARS)).is_ok());
    assert!(question(&"é".repeat(MAX_QUESTION_CHARS + 1)).is_err());
}

#[test]
fn test_language() {
    assert_eq!(language("fr").unwrap(), LanguageCode::Fr);
    let err = language("xx").unwrap_err();
    assert_eq!(err.field, "language");
}

#[test]
fn test_share_token() {
    assert_eq!(share_token("abc").unwrap(), "abc");
    assert!(share_token("").is_err());
}
