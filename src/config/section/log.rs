//! `[log]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [log]
//! output = "proj2.out"   # Journal file, one line per event
//! append = false         # Keep previous runs instead of truncating
//! verbose = false        # Print diagnostic messages to stderr
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Journal and diagnostics settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Journal file path, relative to the working directory.
    pub output: PathBuf,

    /// Append to an existing journal instead of truncating it.
    pub append: bool,

    /// Enable `debug!` diagnostics.
    pub verbose: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("proj2.out"),
            append: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::test_parse_config;

    #[test]
    fn test_log_config() {
        let config =
            test_parse_config("[log]\noutput = \"out/santa.log\"\nappend = true\nverbose = true");

        assert_eq!(config.log.output, PathBuf::from("out/santa.log"));
        assert!(config.log.append);
        assert!(config.log.verbose);
    }

    #[test]
    fn test_log_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.log.output, PathBuf::from("proj2.out"));
        assert!(!config.log.append);
        assert!(!config.log.verbose);
    }

    #[test]
    fn test_log_config_partial_override() {
        let config = test_parse_config("[log]\nappend = true");

        assert!(config.log.append);
        assert_eq!(config.log.output, PathBuf::from("proj2.out"));
    }
}
