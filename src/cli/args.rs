//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::core::{Parameters, WorkshopError};

/// Santa's workshop: santa, elves and reindeer synchronized by semaphores
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of elves (1-999)
    #[arg(value_parser = clap::value_parser!(u16).range(1..=999))]
    pub elves: u16,

    /// Number of reindeer (1-19)
    #[arg(value_parser = clap::value_parser!(u16).range(1..=19))]
    pub reindeer: u16,

    /// Maximum time an elf works alone before asking for help (0-1000)
    #[arg(value_parser = clap::value_parser!(u32).range(0..=1000))]
    pub max_work: u32,

    /// Maximum reindeer holiday length (0-1000), halved for each holiday
    #[arg(value_parser = clap::value_parser!(u32).range(0..=1000))]
    pub max_holiday: u32,

    /// Journal file path (default: proj2.out)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: workshop.toml, if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Append to the journal instead of truncating it
    #[arg(short, long)]
    pub append: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validated run parameters.
    pub fn parameters(&self) -> Result<Parameters, WorkshopError> {
        Parameters::new(self.elves, self.reindeer, self.max_work, self.max_holiday)
    }
}
