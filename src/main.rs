use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Builder;

use nirocheck::args::Args;
use nirocheck::config::Config;
use nirocheck::logging::init_tracing;
use nirocheck::store::FileStore;
use nirocheck::sync::SyncClient;
use nirocheck::ui::{self, App};

const LOG_FILE_NAME: &str = "nirocheck.log";

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    config.apply_env();
    config.apply_overrides(args.overrides());
    config.validate().context("validating configuration")?;

    let state_dir = config.state_dir();
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| state_dir.join(LOG_FILE_NAME));
    init_tracing(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let endpoint = config.endpoint()?;
    if endpoint.is_none() {
        tracing::warn!("No endpoint configured; save and stock refresh will fail");
    }
    tracing::info!(
        state_dir = %state_dir.display(),
        endpoint = endpoint.as_ref().map(|url| url.as_str()).unwrap_or("<unset>"),
        "Starting nirocheck"
    );

    let store = FileStore::open(&state_dir)
        .with_context(|| format!("opening state directory {}", state_dir.display()))?;
    let app = App::new(Box::new(store));
    let client = SyncClient::new(endpoint, config.push_timeout()).context("building HTTP client")?;

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating Tokio runtime")?;
    ui::run(app, client, config.tick_rate(), runtime.handle())?;
    runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    Ok(())
}
