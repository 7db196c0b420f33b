//! Workshop configuration from `workshop.toml` and CLI flags.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── log        # [log]
//! │   └── timing     # [timing]
//! ├── error.rs       # ConfigError
//! └── mod.rs         # WorkshopConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[log]`    | Journal path, append mode, verbose diagnostics |
//! | `[timing]` | Unit of the work / holiday bounds              |
//!
//! The file is optional. CLI flags win over file values.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{LogConfig, TimingConfig};

use crate::{cli::Cli, log};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "workshop.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing workshop.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopConfig {
    /// Journal and diagnostics settings
    #[serde(default)]
    pub log: LogConfig,

    /// Duration unit settings
    #[serde(default)]
    pub timing: TimingConfig,
}

impl WorkshopConfig {
    /// Load configuration for a run.
    ///
    /// An explicit `--config` file must exist; the default one is used only
    /// if present.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG);
                if path.exists() {
                    Self::from_path(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_cli(cli);
        Ok(config)
    }

    /// Parse config from TOML content, warning about unknown fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored);
        }
        Ok(config)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse(&content)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "ignoring unknown fields in {}:", DEFAULT_CONFIG);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// CLI flags override file values.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(output) = &cli.output {
            self.log.output = output.clone();
        }
        if cli.append {
            self.log.append = true;
        }
        if cli.verbose {
            self.log.verbose = true;
        }
    }
}

/// Parse a test config, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> WorkshopConfig {
    let (parsed, ignored) = WorkshopConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_args;
    use crate::core::TimeUnit;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_fields_are_collected() {
        let (config, ignored) =
            WorkshopConfig::parse_with_ignored("[log]\ncolour = true\n[santa]\nbeard = 1").unwrap();

        assert_eq!(config, WorkshopConfig::default());
        assert_eq!(ignored.len(), 2);
        assert!(ignored.contains(&"log.colour".to_string()));
    }

    #[test]
    fn test_invalid_value_is_error() {
        let err = WorkshopConfig::parse("[timing]\nunit = \"hours\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[log]\noutput = \"run.out\"\n[timing]\nunit = \"micros\"").unwrap();

        let cli = parse_args(["workshop", "-C", path.to_str().unwrap(), "5", "2", "10", "10"])
            .unwrap();
        let config = WorkshopConfig::load(&cli).unwrap();

        assert_eq!(config.log.output, PathBuf::from("run.out"));
        assert_eq!(config.timing.unit, TimeUnit::Micros);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let cli = parse_args(["workshop", "-C", path.to_str().unwrap(), "5", "2", "10", "10"])
            .unwrap();
        let err = WorkshopConfig::load(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workshop.toml");
        fs::write(&path, "[log]\noutput = \"file.out\"\nappend = false").unwrap();

        let cli = parse_args([
            "workshop",
            "-C",
            path.to_str().unwrap(),
            "-o",
            "cli.out",
            "--append",
            "--verbose",
            "5",
            "2",
            "10",
            "10",
        ])
        .unwrap();
        let config = WorkshopConfig::load(&cli).unwrap();

        assert_eq!(config.log.output, PathBuf::from("cli.out"));
        assert!(config.log.append);
        assert!(config.log.verbose);
    }
}
