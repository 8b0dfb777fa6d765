//! pagerduty-exporter - PagerDuty user directory as Prometheus metrics

use clap::Parser;
use pagerduty_exporter::config::Config;
use pagerduty_exporter::server::{AppState, HttpServer};
use pagerduty_exporter::{
    CollectorRunner, ExporterError, ExporterMetrics, PagerDutyClient, Result, UserCollector,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pagerduty-exporter", version, about)]
struct Cli {
    /// YAML configuration file; environment variables override its values
    #[arg(short, long, env = "EXPORTER_CONFIG")]
    config: Option<PathBuf>,

    /// Run a single collection pass, print the exposition and exit
    #[arg(long)]
    once: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    let metrics = Arc::new(ExporterMetrics::new()?);
    let client = PagerDutyClient::new(config.pagerduty())?;

    let collector = UserCollector::new(Arc::new(client), metrics.user_info(), metrics.api_counter())
        .with_list_limit(config.pagerduty().list_limit)
        .with_team_filter(config.pagerduty().team_filter.clone());
    let runner = CollectorRunner::new(collector, config.collector());

    if cli.once {
        runner.run_once().await?;
        print!("{}", metrics.render()?);
        return Ok(());
    }

    let state = AppState::new(Arc::clone(&metrics), runner.status());
    let server = HttpServer::new(config.server(), state).bind()?;
    let handle = server.handle();

    let outcome = tokio::select! {
        res = server => res.map_err(|e| ExporterError::server(format!("Server error: {}", e))),
        res = runner.run(HttpServer::shutdown_signal()) => res,
    };

    handle.stop(true).await;
    info!("Exporter stopped");
    outcome
}
