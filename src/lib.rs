//! AI robots.txt generator
//!
//! Fetches a robots.txt that blocks AI scrapers from the Dark Visitors API,
//! caches it next to the project, and writes it into the project's static
//! output directory. Build tools call [`AiRobots::config_resolved`]; the
//! `ai-robots` binary does the same from the command line.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod fs;
pub mod logging;
pub mod plugin;
pub mod remote;

pub use config::{Credential, FetchConfig, PluginOptions};
pub use error::{Error, Result};
pub use fetcher::{CachedContentFetcher, ContentSource, Resolved};
pub use plugin::AiRobots;
pub use remote::{DarkVisitorsClient, RemoteResult, RemoteTextProvider};
