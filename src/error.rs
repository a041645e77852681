//! Error types for the conference sync.
//!
//! The library reports everything through [`SyncError`]; the binary wraps it
//! with `anyhow` context before printing.

use std::path::PathBuf;

/// Errors raised while fetching, transforming or persisting conference data.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status.
    #[error("{url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Directory listing body was not the expected array of file entries.
    #[error("malformed listing from {url}: {reason}")]
    Listing { url: String, reason: String },

    /// Free-text date range that could not be turned into calendar dates.
    #[error("could not parse date {text:?}: {reason}")]
    DateRange { text: String, reason: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A local group file could not be parsed or serialized.
    #[error("YAML error in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The loader template failed to render.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Invalid configuration value.
    #[error("config error: {message}")]
    Config { message: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SyncError>;

impl SyncError {
    pub fn date_range(text: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::DateRange {
            text: text.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap a `std::io::Error` with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_error_names_input() {
        let err = SyncError::date_range("Smarch 3", "unknown month");
        assert_eq!(
            err.to_string(),
            "could not parse date \"Smarch 3\": unknown month"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SyncError::io("src/data/conferences/aaai.yml", source);
        assert!(err.to_string().contains("aaai.yml"));
        assert!(err.to_string().contains("gone"));
    }
}
