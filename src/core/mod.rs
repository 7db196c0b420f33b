//! Core types - pure abstractions shared across the codebase.

mod error;
mod params;
mod role;
mod state;

pub use error::WorkshopError;
pub use params::{Parameters, TimeUnit};
pub use role::{ActorId, Role};
pub use state::{is_shutdown, register_signals, setup_shutdown_handler};

/// Result alias for everything an actor or the supervisor does.
pub type Result<T, E = WorkshopError> = std::result::Result<T, E>;
