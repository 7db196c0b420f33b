//! `[timing]` section configuration.
//!
//! W and H on the command line are abstract amounts; this section picks
//! their unit.
//!
//! ```toml
//! [timing]
//! unit = "millis"   # or "micros"
//! ```

use serde::{Deserialize, Serialize};

use crate::core::TimeUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Unit of the work and holiday bounds.
    pub unit: TimeUnit,
}
