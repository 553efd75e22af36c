//! DevOps Dashboard
//!
//! Terminal dashboard polling the metrics API for system metrics, container
//! services and active alerts.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use devops_dashboard::dashboard::{App, Config};

#[derive(Parser, Debug)]
#[command(name = "devops-dashboard")]
#[command(about = "Terminal dashboard for system metrics, services and alerts", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Metrics API base URL (overrides config file)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Seconds between refreshes (overrides config file)
    #[arg(short, long, value_name = "SECONDS")]
    interval: Option<u64>,
}

fn init_tracing() {
    // Log to a file so output does not corrupt the TUI
    let log_path = dirs::data_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
        .join("devops-dashboard")
        .join("dashboard.log");

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(file)
                .init();
        }
        Err(_) => {
            // No log file: only errors, on stderr
            tracing_subscriber::fmt()
                .with_target(false)
                .with_max_level(tracing::Level::ERROR)
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing();

    let config = Config::load(args.config.as_deref())?.with_overrides(args.url, args.interval);

    let app = App::new(config)?;
    app.run().await
}
