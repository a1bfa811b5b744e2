//! Snapshot sources: where the three JSON documents are read from

use crate::config::Config;
use crate::errors::{DashboardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Anything that can hand back the raw bytes of a snapshot document
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch the document at a path relative to the source root
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

/// Build the source named by `DATA_SOURCE`
pub fn from_config(config: &Config) -> Result<Arc<dyn SnapshotSource>> {
    if config.is_remote_source() {
        Ok(Arc::new(HttpSource::new(&config.data_source, config.http_timeout)?))
    } else {
        Ok(Arc::new(DirectorySource::new(&config.data_source)))
    }
}

/// Snapshots published next to a static site or any HTTP server
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(format!("status-dashboard/{}", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path);
        debug!("Fetching snapshot {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(DashboardError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Snapshots written to a local directory by the data job
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl SnapshotSource for DirectorySource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let file = self.root.join(path);
        debug!("Reading snapshot {}", file.display());

        Ok(tokio::fs::read(&file).await?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
