//! Cache-validated fetch-or-serve flow
//!
//! One invocation walks through these steps, strictly in order:
//!
//! 1. read the cache record; any failure counts as a miss
//! 2. serve the cached body if it is younger than the TTL
//! 3. otherwise call the API once and store the new body in the cache
//! 4. create the output directory and write the body to the output file
//!
//! The output file is only touched once the content is known, so a failed run
//! never leaves a partially written `robots.txt` behind.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::cache::{self, CacheReadError, CacheRecord};
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::fs::{FileSystem, LocalFs};
use crate::remote::RemoteTextProvider;

/// Where the served content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// A fresh cache record; no request was made
    Cache,
    /// A live API call
    Remote,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub output_path: PathBuf,
    pub content: String,
    pub source: ContentSource,
}

/// Serves robots.txt content from the cache or the API and writes it out
#[derive(Debug, Clone)]
pub struct CachedContentFetcher<P, F = LocalFs> {
    provider: P,
    fs: F,
    diagnostics: bool,
}

impl<P: RemoteTextProvider> CachedContentFetcher<P, LocalFs> {
    /// Creates a fetcher that uses the real filesystem
    pub fn new(provider: P) -> Self {
        Self::with_fs(provider, LocalFs)
    }
}

impl<P, F> CachedContentFetcher<P, F>
where
    P: RemoteTextProvider,
    F: FileSystem,
{
    /// Creates a fetcher with a custom filesystem
    pub fn with_fs(provider: P, fs: F) -> Self {
        Self {
            provider,
            fs,
            diagnostics: false,
        }
    }

    /// Logs the output path and content after each successful run
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves the content and writes it to `output_path`
    ///
    /// # Errors
    /// * [`Error::Remote`] / [`Error::Transport`] if a live fetch was needed and
    ///   failed; neither the cache nor the output is written
    /// * [`Error::Io`] if the cache, the output directory or the output file
    ///   could not be written
    pub async fn resolve_content(
        &self,
        config: FetchConfig,
        cache_path: &Path,
        output_path: &Path,
        cache_ttl: Duration,
    ) -> Result<Resolved> {
        let (content, source) = match self.read_fresh_cache(cache_path, cache_ttl).await {
            Some(content) => (content, ContentSource::Cache),
            None => (
                self.fetch_live(&config, cache_path).await?,
                ContentSource::Remote,
            ),
        };

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs
                .create_dir_all(parent)
                .await
                .map_err(|e| Error::io(parent, e))?;
        }

        self.fs
            .write_file(output_path, content.as_bytes())
            .await
            .map_err(|e| Error::io(output_path, e))?;

        if self.diagnostics {
            info!(path = %output_path.display(), "Generated robots.txt");
            info!("Content:\n{}", content);
        }

        Ok(Resolved {
            output_path: output_path.to_path_buf(),
            content,
            source,
        })
    }

    /// Returns the cached body if a usable, fresh record exists
    async fn read_fresh_cache(&self, cache_path: &Path, ttl: Duration) -> Option<String> {
        let record = match cache::read_record(&self.fs, cache_path).await {
            Ok(record) => record,
            Err(CacheReadError::NotFound) => {
                debug!(path = %cache_path.display(), "no robots.txt cache yet");
                return None;
            }
            Err(e) => {
                debug!(path = %cache_path.display(), error = %e, "ignoring unusable cache");
                return None;
            }
        };

        let now = Utc::now();
        if !record.is_fresh(ttl, now) {
            debug!(
                age_minutes = record.age(now).num_minutes(),
                "robots.txt cache expired"
            );
            return None;
        }

        // An empty body is treated as nothing cached
        if record.content.is_empty() {
            debug!("robots.txt cache is empty");
            return None;
        }

        debug!("serving robots.txt from cache");
        Some(record.content)
    }

    /// Calls the API and, on success, replaces the cache record
    async fn fetch_live(&self, config: &FetchConfig, cache_path: &Path) -> Result<String> {
        let response = self
            .provider
            .fetch(
                &config.credential,
                &config.agent_categories,
                &config.disallow_path,
            )
            .await?;

        if !response.is_success() {
            return Err(Error::Remote {
                status: response.status_code,
                body: response.body,
            });
        }

        let record = CacheRecord::new(response.body);
        cache::write_record(&self.fs, cache_path, &record)
            .await
            .map_err(|e| Error::io(cache_path, e))?;

        Ok(record.content)
    }
}
