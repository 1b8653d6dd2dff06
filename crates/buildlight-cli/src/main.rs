//! buildlight - drive a build indicator from a CI server
//!
//! ## Commands
//!
//! - `watch`: poll a cc.xml feed and signal the project's state
//! - `list`: show the projects a feed publishes
//!
//! The feed URL and project come from flags or from the
//! `BUILDLIGHT_CC_URL` / `BUILDLIGHT_CC_PROJECT` environment variables.

mod sink;

use std::time::Duration;

use anyhow::{Context, Result};
use buildlight_cctray::{CcTraySource, HttpFetcher};
use buildlight_core::{telemetry, IndicatorAction, Watcher, WatcherConfig};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn, Level};

use crate::sink::LogSink;

#[derive(Parser, Debug)]
#[command(name = "buildlight")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build light driven by a CI server's cc.xml feed", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines and cycle reports
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Poll the CI server and drive the indicator
    Watch {
        #[command(flatten)]
        server: ServerArgs,

        /// Project name as it appears in cc.xml
        #[arg(short, long, env = "BUILDLIGHT_CC_PROJECT")]
        project: String,

        /// Seconds between polls
        #[arg(
            short,
            long,
            env = "BUILDLIGHT_INTERVAL",
            default_value_t = 15,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        interval: u64,

        /// Run a single cycle and exit (non-zero on failure)
        ///
        /// Prints the status line, or a JSON cycle report with `--json`.
        #[arg(long)]
        once: bool,
    },

    /// List projects published by the feed
    List {
        #[command(flatten)]
        server: ServerArgs,
    },
}

#[derive(Args, Debug)]
struct ServerArgs {
    /// URL of the cc.xml feed
    #[arg(short, long, env = "BUILDLIGHT_CC_URL")]
    url: String,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
}

impl ServerArgs {
    fn source(&self) -> Result<CcTraySource<HttpFetcher>> {
        CcTraySource::http(Duration::from_secs(self.timeout))
            .context("Failed to create HTTP client")
    }
}

/// Result of one watch cycle, as printed with `--json`.
#[derive(Debug, Serialize)]
struct CycleReport<'a> {
    project: &'a str,
    action: IndicatorAction,
    checked_at: DateTime<Utc>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    telemetry::init_tracing(cli.json, level);

    match cli.command {
        Commands::Watch {
            server,
            project,
            interval,
            once,
        } => cmd_watch(&server, &project, interval, once, cli.json).await,
        Commands::List { server } => cmd_list(&server, cli.json).await,
    }
}

async fn cmd_watch(
    server: &ServerArgs,
    project: &str,
    interval: u64,
    once: bool,
    json: bool,
) -> Result<()> {
    let config = WatcherConfig::new(server.url.as_str(), project)?;
    let sink = if json {
        LogSink::new(project).log_only()
    } else {
        LogSink::new(project)
    };
    let watcher = Watcher::new(config, server.source()?, sink);

    if once {
        let action = watcher
            .watch_server()
            .await
            .with_context(|| format!("Failed to check project '{}'", project))?;
        report_cycle(project, action, json)?;
        return Ok(());
    }

    info!(url = %server.url, project, interval, "Watching CI server");

    let mut ticker = tokio::time::interval(Duration::from_secs(interval));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match watcher.watch_server().await {
                    Ok(action) => report_cycle(project, action, json)?,
                    Err(e) => warn!(project, error = %e, "Watch cycle failed"),
                }
            }
            _ = &mut shutdown => {
                info!("Interrupted, stopping watcher");
                break;
            }
        }
    }

    Ok(())
}

/// Print the JSON cycle report when `--json` is set. Without it the
/// `LogSink` status line is the only stdout output.
fn report_cycle(project: &str, action: IndicatorAction, json: bool) -> Result<()> {
    if let Some(line) = cycle_report_line(project, action, json)? {
        println!("{}", line);
    }
    Ok(())
}

fn cycle_report_line(
    project: &str,
    action: IndicatorAction,
    json: bool,
) -> Result<Option<String>> {
    if !json {
        return Ok(None);
    }
    let report = CycleReport {
        project,
        action,
        checked_at: Utc::now(),
    };
    Ok(Some(serde_json::to_string(&report)?))
}

async fn cmd_list(server: &ServerArgs, json: bool) -> Result<()> {
    let names = server
        .source()?
        .list_projects(&server.url)
        .await
        .with_context(|| format!("Failed to read projects from {}", server.url))?;

    if json {
        println!("{}", serde_json::to_string(&names)?);
    } else if names.is_empty() {
        println!("No projects published at {}", server.url);
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}
