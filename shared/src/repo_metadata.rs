//! Repository metadata returned by the source-hosting REST API.

use serde::Deserialize;
use thiserror::Error;

/// The only field of the repository document the page reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RepoMetadata {
    /// Number of users who starred the repository.
    pub stargazers_count: u64,
}

/// Why the star count could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataFetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Status(u16),
    /// The body was not a repository document.
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Whether `status` counts as success.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract the star count from a settled response.
pub fn parse_repo_metadata(status: u16, body: &str) -> Result<u64, MetadataFetchError> {
    if !is_success(status) {
        return Err(MetadataFetchError::Status(status));
    }
    let metadata: RepoMetadata = serde_json::from_str(body)
        .map_err(|err| MetadataFetchError::Malformed(err.to_string()))?;
    Ok(metadata.stargazers_count)
}

/// Text drawn next to the repository icon.
pub fn star_label(count: u64) -> String {
    format!("☆ {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_star_count_and_ignores_other_fields() {
        let body = r#"{"id": 1, "full_name": "oslabs-beta/Kafka-Sonar", "stargazers_count": 42}"#;
        assert_eq!(parse_repo_metadata(200, body), Ok(42));
    }

    #[test]
    fn non_success_status_is_an_error() {
        let body = r#"{"stargazers_count": 42}"#;
        assert_eq!(parse_repo_metadata(500, body), Err(MetadataFetchError::Status(500)));
        assert_eq!(parse_repo_metadata(304, body), Err(MetadataFetchError::Status(304)));
    }

    #[test]
    fn status_wins_over_unreadable_body() {
        assert_eq!(parse_repo_metadata(500, ""), Err(MetadataFetchError::Status(500)));
        assert!(matches!(parse_repo_metadata(200, ""), Err(MetadataFetchError::Malformed(_))));
    }

    #[test]
    fn malformed_bodies_are_errors() {
        for body in [
            "",
            "not json",
            r#"{"message": "API rate limit exceeded"}"#,
            r#"{"stargazers_count": -1}"#,
            r#"{"stargazers_count": "42"}"#,
        ] {
            assert!(
                matches!(parse_repo_metadata(200, body), Err(MetadataFetchError::Malformed(_))),
                "body {body:?} should be rejected"
            );
        }
    }

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(MetadataFetchError::Status(403).to_string(), "HTTP error: 403");
        assert_eq!(
            MetadataFetchError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }

    #[test]
    fn star_label_prefixes_glyph() {
        assert_eq!(star_label(42), "☆ 42");
    }
}
