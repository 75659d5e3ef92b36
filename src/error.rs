// Error types for the octokit client.
// Covers transport, HTTP status, decoding, and request construction failures.

use thiserror::Error;

/// Domain identifier attached to every error raised by this crate.
pub const ERROR_DOMAIN: &str = "com.nerdishbynature.octokit";

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("No async runtime available to run the request")]
    NoRuntime,

    #[error("Request was cancelled")]
    Cancelled,
}

impl Error {
    /// HTTP status code carried by the error, if the server answered.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Stable identifier for matching errors from this crate.
    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }

    /// Whether GitHub answered 404.
    pub fn is_not_found(&self) -> bool {
        self.code() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_exposes_code_and_domain() {
        let err = Error::Status {
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.code(), Some(404));
        assert_eq!(err.domain(), "com.nerdishbynature.octokit");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_error_has_no_code() {
        let err: Error = serde_json::from_str::<Vec<u64>>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.code(), None);
        assert!(!err.is_not_found());
        assert_eq!(err.domain(), ERROR_DOMAIN);
    }

    #[test]
    fn test_server_error_is_not_not_found() {
        let err = Error::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.code(), Some(500));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "GitHub API returned HTTP 500: boom");
    }
}
