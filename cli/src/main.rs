//! CLI entrypoint for cmdhub
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod catalog;

use anyhow::{Context, Result};
use clap::Parser;
use cmdhub_application::DispatchCommandUseCase;
use cmdhub_domain::ProgramInfo;
use cmdhub_infrastructure::{ConfigLoader, EntryPointTable, FileConfig};
use cmdhub_presentation::Cli;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "CMDHUB_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load(ConfigLoader::explicit_config_path().as_deref())
        .context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_logging(&config);
    info!("Starting cmdhub");

    let catalog = catalog::tool_catalog();
    let fallback = EntryPointTable::new(&catalog).with_path_search(config.fallback.search_path);
    debug!(
        tools = catalog.len(),
        search_path = config.fallback.search_path,
        "Wired tool catalog"
    );

    let program = ProgramInfo::new(env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));
    let dispatcher = DispatchCommandUseCase::new(&catalog, &fallback, program);

    let mut properties = config.initial_properties();
    let stderr = std::io::stderr();
    let mut console = stderr.lock();

    let status = dispatcher.execute(cli.into_argv(), &mut properties, &mut console)?;
    console.flush()?;
    drop(console);

    std::process::exit(status);
}

/// `CMDHUB_LOG` wins over the configured level
fn init_logging(config: &FileConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
