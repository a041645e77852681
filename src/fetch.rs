//! Upstream conference descriptions.
//!
//! The ccfddl repository keeps one YAML document per conference. We list a
//! category directory through the GitHub contents API, download every YAML
//! entry and parse it.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{SyncConfig, USER_AGENT};
use crate::error::{Result, SyncError};
use crate::models::UpstreamConference;

/// Extensions of upstream data files.
const DATA_FILE_EXTENSIONS: &[&str] = &[".yml", ".yaml"];

/// Anything that can produce the upstream conference list.
pub trait ConferenceSource {
    fn fetch_conferences(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UpstreamConference>>> + Send;
}

/// One entry of a GitHub contents API directory listing.
#[derive(Debug, Deserialize)]
struct ListingEntry {
    name: String,
    /// `null` for sub-directories
    download_url: Option<String>,
}

/// Fetches conference descriptions over HTTP, one request at a time.
#[derive(Debug, Clone)]
pub struct RemoteFetcher {
    client: Client,
    listing_urls: Vec<String>,
    token: Option<String>,
}

impl RemoteFetcher {
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SyncError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            listing_urls: config.listing_urls.clone(),
            token: config.github_token.clone(),
        })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| SyncError::Http {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| SyncError::Http {
            url: url.to_string(),
            source: e,
        })
    }

    async fn list_data_files(&self, listing_url: &str) -> Result<Vec<ListingEntry>> {
        let body = self.get_text(listing_url).await?;
        let entries: Vec<ListingEntry> =
            serde_json::from_str(&body).map_err(|e| SyncError::Listing {
                url: listing_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(entries
            .into_iter()
            .filter(|entry| is_data_file(&entry.name))
            .collect())
    }

    /// Fetch every conference under one listing endpoint.
    pub async fn fetch_listing(&self, listing_url: &str) -> Result<Vec<UpstreamConference>> {
        let entries = self.list_data_files(listing_url).await?;
        info!("Found {} data files at {}", entries.len(), listing_url);

        let mut conferences = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(ref download_url) = entry.download_url else {
                debug!("Skipping {} (no download URL)", entry.name);
                continue;
            };

            let content = self.get_text(download_url).await?;
            match parse_document(&content) {
                Ok(Some(conference)) => conferences.push(conference),
                Ok(None) => warn!("Skipping {}: document holds no conference", entry.name),
                Err(e) => warn!("Skipping {}: {}", entry.name, e),
            }
        }

        Ok(conferences)
    }
}

impl ConferenceSource for RemoteFetcher {
    async fn fetch_conferences(&self) -> Result<Vec<UpstreamConference>> {
        let mut conferences = Vec::new();
        for url in &self.listing_urls {
            conferences.extend(self.fetch_listing(url).await?);
        }
        Ok(conferences)
    }
}

fn is_data_file(name: &str) -> bool {
    DATA_FILE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Unwrap the single-element list a ccfddl document consists of.
pub fn parse_document(content: &str) -> std::result::Result<Option<UpstreamConference>, serde_yaml::Error> {
    let documents: Vec<UpstreamConference> = serde_yaml::from_str(content)?;
    Ok(documents.into_iter().next())
}
