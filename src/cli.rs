//! Command-line interface parsing for ai-robots
//!
//! Every option can also come from the environment, so the tool drops into a
//! CI step or a build script without extra wiring.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{defaults, PluginOptions};

/// Generate a robots.txt that blocks AI scrapers, via the Dark Visitors API
#[derive(Parser, Debug)]
#[command(name = "ai-robots")]
#[command(about = "Generate a robots.txt that blocks AI scrapers")]
#[command(version)]
pub struct Cli {
    /// Dark Visitors access token
    #[arg(long, env = "DARKVISITORS_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Agent category to disallow (repeatable)
    ///
    /// Defaults to "AI Data Scraper" and "Undocumented AI Agent".
    #[arg(long = "agent-type", value_name = "TYPE", env = "AI_ROBOTS_AGENT_TYPES", value_delimiter = ',')]
    pub agent_types: Vec<String>,

    /// Path pattern to disallow for those agents
    #[arg(long, value_name = "PATH", env = "AI_ROBOTS_DISALLOW")]
    pub disallow: Option<String>,

    /// Hours to reuse a fetched robots.txt before asking the API again
    #[arg(long, value_name = "HOURS", env = "AI_ROBOTS_CACHE_HOURS")]
    pub cache_hours: Option<f64>,

    /// Output directory, relative to the project root
    #[arg(long, value_name = "DIR", env = "AI_ROBOTS_OUTPUT_DIR", default_value = defaults::OUTPUT_DIR)]
    pub output_dir: String,

    /// Project root
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Print the generated path and content, and log at debug level
    #[arg(long)]
    pub debug: bool,

    /// Exit with a failure status when robots.txt could not be generated
    ///
    /// Without it, errors are reported but the exit status stays 0 so a
    /// surrounding build keeps going.
    #[arg(long)]
    pub strict: bool,

    /// Override the API base URL
    #[arg(long, value_name = "URL", env = "AI_ROBOTS_API_URL", hide = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Plugin options equivalent to these arguments
    pub fn plugin_options(&self) -> PluginOptions {
        PluginOptions {
            access_token: self.access_token.clone(),
            agent_types: (!self.agent_types.is_empty()).then(|| {
                self.agent_types.iter().map(|t| t.trim().to_string()).collect()
            }),
            disallow: self.disallow.clone(),
            cache_hours: self.cache_hours,
            debug: self.debug,
            output_dir: Some(self.output_dir.clone()),
        }
    }
}
