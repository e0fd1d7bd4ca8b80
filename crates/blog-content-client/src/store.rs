//! Content store access over HTTP

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::StoreConfig;
use crate::error::{BlogError, Result};

/// Source of manifest and post documents, addressed by relative path.
///
/// Implementations own the transport (base address, headers, timeouts);
/// callers only ever pass paths such as `blogging/blogs.json`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch the document at `path` as text
    async fn get_text(&self, path: &str) -> Result<String>;
}

#[async_trait]
impl<T: ContentStore + ?Sized> ContentStore for Arc<T> {
    async fn get_text(&self, path: &str) -> Result<String> {
        (**self).get_text(path).await
    }
}

/// [`ContentStore`] backed by an injected `reqwest::Client` and a base URL
#[derive(Debug, Clone)]
pub struct HttpContentStore {
    client: Client,
    base_url: Url,
}

impl HttpContentStore {
    /// Wrap an existing client; relative paths are resolved against `base_url`
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Build a client with the configured timeout and user agent
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Self::new(client, &config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative content path against the base URL
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| BlogError::InvalidUrl(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.resolve(path)?;
        debug!(url = %url, "Fetching content");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Content request failed");
            BlogError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, url = %url, "Content store returned error status");
            return Err(BlogError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(url = %url, size = body.len(), "Fetched content");
        Ok(body)
    }
}

/// Parse a base URL, making sure its path ends in `/` so joins keep it
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|e| BlogError::InvalidUrl(format!("{}: {}", base_url, e)))?;

    if url.cannot_be_a_base() {
        return Err(BlogError::InvalidUrl(format!(
            "{}: not usable as a base address",
            base_url
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
