//! Configuration section definitions.

mod log;
mod timing;

pub use log::LogConfig;
pub use timing::TimingConfig;
