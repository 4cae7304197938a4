//! Plugin options and their defaults
//!
//! [`PluginOptions`] is what a caller fills in; every optional field falls back
//! to a named constant in [`defaults`]. [`PluginOptions::resolve`] validates the
//! options and produces the immutable [`FetchConfig`] handed to the fetcher.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default option values
pub mod defaults {
    /// Agent categories blocked when none are configured
    pub const AGENT_TYPES: [&str; 2] = ["AI Data Scraper", "Undocumented AI Agent"];
    /// Path pattern disallowed for the blocked agents
    pub const DISALLOW: &str = "/";
    /// How long a fetched body is reused before asking the API again
    pub const CACHE_HOURS: f64 = 24.0;
    /// Directory under the project root that receives `robots.txt`
    pub const OUTPUT_DIR: &str = "static";
}

/// Name of the generated file
pub const OUTPUT_FILENAME: &str = "robots.txt";

/// Opaque bearer token for the Dark Visitors API
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Caller-supplied options, mirroring what a build config would declare
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Dark Visitors access token (required)
    pub access_token: String,
    /// Agent categories to disallow
    #[serde(default)]
    pub agent_types: Option<Vec<String>>,
    /// Path pattern to disallow
    #[serde(default)]
    pub disallow: Option<String>,
    /// Cache lifetime in hours
    #[serde(default)]
    pub cache_hours: Option<f64>,
    /// Log the output path and content after each run
    #[serde(default)]
    pub debug: bool,
    /// Output directory relative to the project root
    #[serde(default)]
    pub output_dir: Option<String>,
}

/// What gets sent to the API; fixed for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub credential: Credential,
    /// Never empty
    pub agent_categories: Vec<String>,
    pub disallow_path: String,
}

/// Options after defaults and validation have been applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub fetch: FetchConfig,
    pub cache_ttl: Duration,
    pub output_dir: PathBuf,
    pub diagnostics: bool,
}

impl PluginOptions {
    /// Options with just a token; everything else defaulted
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Agent categories, trimmed, falling back to the defaults when absent or empty
    pub fn agent_types_or_default(&self) -> Vec<String> {
        match &self.agent_types {
            Some(types) if !types.is_empty() => {
                types.iter().map(|t| t.trim().to_string()).collect()
            }
            _ => defaults::AGENT_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn disallow_or_default(&self) -> String {
        non_empty(self.disallow.as_deref())
            .unwrap_or(defaults::DISALLOW)
            .to_string()
    }

    pub fn cache_hours_or_default(&self) -> f64 {
        self.cache_hours.unwrap_or(defaults::CACHE_HOURS)
    }

    pub fn output_dir_or_default(&self) -> PathBuf {
        PathBuf::from(non_empty(self.output_dir.as_deref()).unwrap_or(defaults::OUTPUT_DIR))
    }

    /// Rejects options that can never lead to a successful run
    pub fn validate(&self) -> Result<()> {
        if Credential::new(self.access_token.as_str()).is_empty() {
            return Err(Error::Config("access token must not be empty".to_string()));
        }

        let hours = self.cache_hours_or_default();
        if !hours.is_finite() || hours <= 0.0 {
            return Err(Error::Config(format!(
                "cache hours must be a positive number, got {}",
                hours
            )));
        }

        if self
            .agent_types
            .as_ref()
            .is_some_and(|types| types.iter().any(|t| t.trim().is_empty()))
        {
            return Err(Error::Config(
                "agent types must not contain blank entries".to_string(),
            ));
        }

        if let Some(dir) = non_empty(self.output_dir.as_deref()) {
            let path = Path::new(dir);
            if path.has_root() || path.is_absolute() {
                return Err(Error::Config(format!(
                    "output dir must be relative to the project root, got {}",
                    dir
                )));
            }
        }

        Ok(())
    }

    /// Validates and applies defaults
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        self.validate()?;

        let hours = self.cache_hours_or_default();
        let cache_ttl = Duration::milliseconds((hours * 3_600_000.0).round() as i64);

        Ok(ResolvedOptions {
            fetch: FetchConfig {
                credential: Credential::new(self.access_token.as_str()),
                agent_categories: self.agent_types_or_default(),
                disallow_path: self.disallow_or_default(),
            },
            cache_ttl,
            output_dir: self.output_dir_or_default(),
            diagnostics: self.debug,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
