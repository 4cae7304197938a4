//! Build-tool hook
//!
//! [`AiRobots`] is what a build tool registers. It is invoked once, after the
//! build configuration (and therefore the project root) is known, and returns
//! the outcome instead of swallowing errors; the embedding tool decides whether
//! a failure should warn or fail the build.

use std::path::{Path, PathBuf};

use tracing::{info_span, Instrument};

use crate::cache::CACHE_FILENAME;
use crate::config::{PluginOptions, ResolvedOptions, OUTPUT_FILENAME};
use crate::error::Result;
use crate::fetcher::{CachedContentFetcher, Resolved};
use crate::fs::{FileSystem, LocalFs};
use crate::remote::{DarkVisitorsClient, RemoteTextProvider};

/// Name the plugin registers under
pub const PLUGIN_NAME: &str = "ai-robots";

/// robots.txt generator hook
#[derive(Debug, Clone)]
pub struct AiRobots<P = DarkVisitorsClient, F = LocalFs> {
    options: ResolvedOptions,
    fetcher: CachedContentFetcher<P, F>,
}

impl AiRobots {
    /// Validates `options` and builds a hook talking to the public API
    pub fn new(options: PluginOptions) -> Result<Self> {
        Self::with_provider(options, DarkVisitorsClient::new())
    }
}

impl<P: RemoteTextProvider> AiRobots<P, LocalFs> {
    /// Builds a hook with a custom provider
    pub fn with_provider(options: PluginOptions, provider: P) -> Result<Self> {
        Self::with_parts(options, provider, LocalFs)
    }
}

impl<P, F> AiRobots<P, F>
where
    P: RemoteTextProvider,
    F: FileSystem,
{
    /// Builds a hook from explicit collaborators
    pub fn with_parts(options: PluginOptions, provider: P, fs: F) -> Result<Self> {
        let options = options.resolve()?;
        let fetcher = CachedContentFetcher::with_fs(provider, fs).with_diagnostics(options.diagnostics);
        Ok(Self { options, fetcher })
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Location of the cache record for a project
    pub fn cache_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(CACHE_FILENAME)
    }

    /// Location of the generated robots.txt for a project
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root
            .join(&self.options.output_dir)
            .join(OUTPUT_FILENAME)
    }

    /// Runs once the build configuration has been resolved
    pub async fn config_resolved(&self, project_root: &Path) -> Result<Resolved> {
        let span = info_span!("plugin", name = PLUGIN_NAME, root = %project_root.display());

        self.fetcher
            .resolve_content(
                self.options.fetch.clone(),
                &self.cache_path(project_root),
                &self.output_path(project_root),
                self.options.cache_ttl,
            )
            .instrument(span)
            .await
    }
}
