//! The shared workshop every actor of a run holds a handle to.
//!
//! ```text
//! workshop/
//! ├── state.rs     # SharedState: counters behind the state lock
//! └── journal.rs   # Journal: ordered event lines, LineSink impls
//! ```
//!
//! A `Workshop` is created before the first actor is spawned and dropped
//! only after the last one is joined; dropping it closes the journal sink.

mod journal;
mod state;

use std::sync::Arc;

pub use journal::{FileSink, Journal, LineSink};
#[cfg(test)]
pub use journal::MemorySink;
pub use state::{Decision, HELP_GROUP_SIZE, JoinOutcome, SharedState};

use crate::core::{Parameters, TimeUnit};
use crate::sync::SignalSet;

pub struct Workshop {
    params: Parameters,
    unit: TimeUnit,
    state: SharedState,
    signals: Arc<SignalSet>,
    journal: Journal,
}

impl Workshop {
    pub fn new(params: Parameters, unit: TimeUnit, sink: Box<dyn LineSink>) -> Self {
        Self {
            params,
            unit,
            state: SharedState::new(usize::from(params.reindeer)),
            signals: Arc::new(SignalSet::new()),
            journal: Journal::new(sink),
        }
    }

    #[inline]
    pub const fn params(&self) -> &Parameters {
        &self.params
    }

    #[inline]
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    #[inline]
    pub const fn state(&self) -> &SharedState {
        &self.state
    }

    #[inline]
    pub fn signals(&self) -> &SignalSet {
        &self.signals
    }

    /// Shared handle on the signals, for cancellation from outside the run.
    pub fn signal_handle(&self) -> Arc<SignalSet> {
        Arc::clone(&self.signals)
    }

    #[inline]
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }
}
