//! ai-robots - generate a robots.txt that blocks AI scrapers
//!
//! Runs the plugin hook once for a project directory. Failures are reported
//! but, unless `--strict` is given, do not fail the surrounding build.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use ai_robots::cli::Cli;
use ai_robots::{AiRobots, ContentSource, DarkVisitorsClient};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    ai_robots::logging::init(cli.debug);

    let provider = match &cli.api_url {
        Some(url) => DarkVisitorsClient::with_base_url(url.as_str()),
        None => DarkVisitorsClient::new(),
    };

    let result = match AiRobots::with_provider(cli.plugin_options(), provider) {
        Ok(plugin) => plugin.config_resolved(&cli.root).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(resolved) => {
            let source = match resolved.source {
                ContentSource::Cache => "cache",
                ContentSource::Remote => "api",
            };
            info!(path = %resolved.output_path.display(), source, "robots.txt written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(details = ?e, "AI robots.txt plugin error: {}", e);
            if cli.strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
