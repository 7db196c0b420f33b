//! Workshop - santa, his elves and his reindeer, one thread each.

mod actor;
mod cli;
mod config;
mod core;
mod logger;
mod sync;
mod utils;
mod workshop;

use std::sync::Arc;

use actor::Supervisor;
use anyhow::{Context, Result};
use config::WorkshopConfig;
use workshop::{FileSink, Workshop};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = cli::parse_args(std::env::args_os())?;
    let params = cli.parameters()?;
    let config = WorkshopConfig::load(&cli)?;
    logger::set_verbose(config.log.verbose);

    let sink = FileSink::open(&config.log.output, config.log.append)?;
    let workshop = Arc::new(Workshop::new(params, config.timing.unit, Box::new(sink)));
    core::register_signals(workshop.signal_handle());

    debug!(
        "workshop";
        "journal: {}, unit: {:?}",
        config.log.output.display(),
        config.timing.unit
    );

    let result = Supervisor::new(Arc::clone(&workshop)).run();
    if core::is_shutdown() {
        return result.context("interrupted by Ctrl+C");
    }
    result?;

    debug!("workshop"; "Christmas started, {} lines written", workshop.journal().sequence());
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
