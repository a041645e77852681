//! Sync configuration.
//!
//! Defaults reproduce the layout of the front-end repository the sync runs
//! in: group files under `src/data/conferences`, the generated loader at
//! `src/utils/conferenceLoader.ts`, and the ccfddl AI category upstream.
//! The binary overrides individual values from flags and environment.

use std::path::PathBuf;

use crate::error::{Result, SyncError};

/// GitHub contents API listing of the ccfddl AI conference descriptions.
pub const DEFAULT_LISTING_URL: &str =
    "https://api.github.com/repos/ccfddl/ccf-deadlines/contents/conference/AI";

pub const DEFAULT_DATA_DIR: &str = "src/data/conferences";

pub const DEFAULT_LOADER_PATH: &str = "src/utils/conferenceLoader.ts";

/// Module path the generated loader imports group files from.
pub const DEFAULT_IMPORT_PREFIX: &str = "@/data/conferences";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent for upstream requests; the GitHub API rejects requests without one.
pub const USER_AGENT: &str = concat!("confsync/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Directory listing endpoints, fetched in order.
    pub listing_urls: Vec<String>,
    pub data_dir: PathBuf,
    pub loader_path: PathBuf,
    pub import_prefix: String,
    pub timeout_secs: u64,
    /// Optional bearer token for the listing/download requests.
    pub github_token: Option<String>,
    /// Compute and report the merge without touching any file.
    pub dry_run: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            listing_urls: vec![DEFAULT_LISTING_URL.to_string()],
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            loader_path: PathBuf::from(DEFAULT_LOADER_PATH),
            import_prefix: DEFAULT_IMPORT_PREFIX.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            github_token: None,
            dry_run: false,
        }
    }
}

impl SyncConfig {
    /// Reject configurations the sync cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.listing_urls.is_empty() {
            return Err(SyncError::config("at least one listing URL is required"));
        }
        if let Some(url) = self
            .listing_urls
            .iter()
            .find(|u| !(u.starts_with("http://") || u.starts_with("https://")))
        {
            return Err(SyncError::config(format!(
                "listing URL must be http(s): {url}"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SyncError::config("timeout must be at least one second"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_frontend_layout() {
        let config = SyncConfig::default();
        assert_eq!(config.listing_urls, vec![DEFAULT_LISTING_URL.to_string()]);
        assert_eq!(config.data_dir, PathBuf::from("src/data/conferences"));
        assert_eq!(config.loader_path, PathBuf::from("src/utils/conferenceLoader.ts"));
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_listing() {
        let config = SyncConfig {
            listing_urls: vec![],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listing URL"));
    }

    #[test]
    fn test_validate_rejects_non_http_listing() {
        let config = SyncConfig {
            listing_urls: vec!["ftp://example.org/conference".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = SyncConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
