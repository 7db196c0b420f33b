//! Command-line interface module.

mod args;

pub use args::Cli;

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;

use crate::core::WorkshopError;

/// Parse command-line arguments.
///
/// Every malformed, missing, extra or out-of-range argument becomes a
/// single `Parameter` error. `--help` and `--version` print and exit 0.
pub fn parse_args<I, T>(args: I) -> Result<Cli, WorkshopError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => WorkshopError::Parameter(summarize(&err.to_string())),
    })
}

/// First line of a clap error, without its `error: ` tag.
fn summarize(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}
