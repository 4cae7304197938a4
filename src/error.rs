//! Error types surfaced by the robots.txt resolution flow
//!
//! Cache read problems never appear here: they are recovered inside the fetcher
//! and downgraded to a cache miss (see [`crate::cache::CacheReadError`]).

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned to the caller of the plugin hook
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-success status
    #[error("API request failed: {status} - {body}")]
    Remote {
        /// HTTP status code returned by the API
        status: u16,
        /// Raw response body, usually the API's explanation
        body: String,
    },

    /// The request never produced a response (DNS, TLS, connection reset, ...)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Creating a directory or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Options were rejected before any I/O happened
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Wraps an I/O error together with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure came from talking to the remote API
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::Transport(_))
    }

    /// HTTP status of a rejected request, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_contains_status_and_body() {
        let err = Error::Remote {
            status: 401,
            body: "unauthorized".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("unauthorized"));
        assert!(err.is_remote());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = Error::io(
            "static/robots.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("static/robots.txt"));
        assert!(!err.is_remote());
        assert_eq!(err.status(), None);
    }
}
