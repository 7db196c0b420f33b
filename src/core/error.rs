//! Fatal error kinds of a workshop run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::ActorId;
use crate::config::ConfigError;
use crate::sync::Closed;

/// Every condition that ends a run with exit code 1.
#[derive(Debug, Error)]
pub enum WorkshopError {
    #[error("invalid parameters: {0}")]
    Parameter(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to allocate workshop resources: {0}")]
    Resource(String),

    #[error("failed to spawn {actor}")]
    Spawn {
        actor: ActorId,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write log line")]
    Journal(#[source] io::Error),

    #[error("{0} panicked")]
    ActorPanicked(ActorId),

    #[error("workshop run was cancelled")]
    Cancelled,
}

impl WorkshopError {
    /// Whether this error is only a consequence of another failure.
    #[inline]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

// NOTE: a closed signal only ever means the run was cancelled
impl From<Closed> for WorkshopError {
    fn from(_: Closed) -> Self {
        Self::Cancelled
    }
}

impl From<io::Error> for WorkshopError {
    fn from(source: io::Error) -> Self {
        Self::Journal(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WorkshopError::Spawn {
            actor: ActorId::elf(4),
            source: io::Error::other("no threads left"),
        };
        assert_eq!(err.to_string(), "failed to spawn elf-4");

        let err = WorkshopError::Io {
            path: PathBuf::from("proj2.out"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("proj2.out"));

        let err = WorkshopError::ActorPanicked(ActorId::SANTA);
        assert_eq!(err.to_string(), "santa panicked");
    }

    #[test]
    fn test_closed_maps_to_cancelled() {
        let err = WorkshopError::from(Closed);
        assert!(err.is_cancellation());
        assert!(!WorkshopError::Parameter(String::new()).is_cancellation());
    }
}
