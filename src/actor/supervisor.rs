//! Actor Supervisor - spawns, watches and joins every actor of a run
//!
//! # Responsibility
//!
//! The Supervisor is a **thin orchestrator** that:
//! - Spawns santa, the elves and the reindeer on their own threads
//! - Collects one outcome per actor over a channel
//! - Cancels the whole protocol on the first failure
//! - Joins every thread it started before returning
//!
//! It does NOT contain protocol logic - that lives in the actor bodies.
//!
//! # Architecture
//!
//! ```text
//!             spawn            outcome
//! Supervisor ------> actor ----------+
//!     ^                              |
//!     +------------------------------+
//!       first error -> SignalSet::cancel()
//! ```

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Sender};

use super::elf::ElfActor;
use super::reindeer::ReindeerActor;
use super::santa::SantaActor;
use crate::core::{ActorId, Result, Role, WorkshopError};
use crate::utils::plural::plural_count;
use crate::workshop::Workshop;

/// Actor body handed to a [`Spawner`].
pub type ActorBody = Box<dyn FnOnce() + Send + 'static>;

/// Capability to start an actor on its own thread of execution.
pub trait Spawner {
    fn spawn(&self, actor: ActorId, body: ActorBody) -> io::Result<JoinHandle<()>>;
}

/// Named OS threads: `santa`, `elf-<id>`, `reindeer-<id>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner;

impl Spawner for ThreadSpawner {
    fn spawn(&self, actor: ActorId, body: ActorBody) -> io::Result<JoinHandle<()>> {
        thread::Builder::new().name(actor.to_string()).spawn(body)
    }
}

type Outcome = (ActorId, Result<()>);

/// Supervisor - runs one workshop to completion
pub struct Supervisor<S = ThreadSpawner> {
    workshop: Arc<Workshop>,
    spawner: S,
}

impl Supervisor {
    pub fn new(workshop: Arc<Workshop>) -> Self {
        Self::with_spawner(workshop, ThreadSpawner)
    }
}

impl<S: Spawner> Supervisor<S> {
    pub fn with_spawner(workshop: Arc<Workshop>, spawner: S) -> Self {
        Self { workshop, spawner }
    }

    /// Run every actor and wait for all of them.
    ///
    /// Returns the first real failure; cancellations caused by that failure
    /// are not reported separately.
    pub fn run(self) -> Result<()> {
        let params = *self.workshop.params();
        let mut handles: Vec<(ActorId, JoinHandle<()>)> = Vec::new();
        handles
            .try_reserve_exact(params.actor_count())
            .map_err(|e| WorkshopError::Resource(e.to_string()))?;

        let (tx, rx) = channel::unbounded::<Outcome>();
        let mut failure = None;

        for actor in ActorId::roster(&params) {
            let body = actor_body(actor, Arc::clone(&self.workshop), tx.clone());
            match self.spawner.spawn(actor, body) {
                Ok(handle) => handles.push((actor, handle)),
                Err(source) => {
                    crate::log!("error"; "failed to spawn {}: {}", actor, source);
                    self.workshop.signals().cancel();
                    failure = Some(WorkshopError::Spawn { actor, source });
                    break;
                }
            }
        }
        drop(tx);

        if failure.is_none() {
            crate::debug!(
                "workshop";
                "started santa, {} and {}",
                plural_count(usize::from(params.elves), "elf", "elves"),
                plural_count(usize::from(params.reindeer), "reindeer", "reindeer")
            );
        }

        // ends once every spawned body has reported and dropped its sender
        for (actor, result) in rx.iter() {
            match result {
                Ok(()) => crate::debug!("workshop"; "{} finished", actor),
                Err(err) => failure = Some(record_failure(&self.workshop, failure, actor, err)),
            }
        }

        for (actor, handle) in handles {
            // panics were already reported by the actor's guard
            if handle.join().is_err() {
                crate::debug!("workshop"; "{} unwound after a panic", actor);
            }
        }

        crate::debug!(
            "workshop";
            "all actors joined, {} written, final state {:?}",
            plural_count(
                usize::try_from(self.workshop.journal().sequence()).unwrap_or(usize::MAX),
                "line",
                "lines"
            ),
            self.workshop.state().snapshot()
        );

        failure.map_or(Ok(()), Err)
    }
}

/// Keep the root cause: a real error always replaces a cancellation.
fn record_failure(
    workshop: &Workshop,
    current: Option<WorkshopError>,
    actor: ActorId,
    err: WorkshopError,
) -> WorkshopError {
    if !err.is_cancellation() {
        crate::log!("error"; "{} failed: {}", actor, err);
    }
    workshop.signals().cancel();
    match current {
        Some(existing) if !existing.is_cancellation() || err.is_cancellation() => existing,
        _ => err,
    }
}

fn actor_body(actor: ActorId, workshop: Arc<Workshop>, tx: Sender<Outcome>) -> ActorBody {
    Box::new(move || {
        let guard = OutcomeGuard::new(actor, tx);
        let result = match actor.role {
            Role::Santa => SantaActor::new(&workshop).run(),
            Role::Elf => ElfActor::new(actor.id, &workshop).run(),
            Role::Reindeer => ReindeerActor::new(actor.id, &workshop).run(),
        };
        guard.report(result);
    })
}

/// Reports exactly one outcome per actor, `ActorPanicked` when unwinding.
struct OutcomeGuard {
    actor: ActorId,
    tx: Option<Sender<Outcome>>,
}

impl OutcomeGuard {
    const fn new(actor: ActorId, tx: Sender<Outcome>) -> Self {
        Self {
            actor,
            tx: Some(tx),
        }
    }

    fn report(mut self, result: Result<()>) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send((self.actor, result));
        }
    }
}

impl Drop for OutcomeGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send((self.actor, Err(WorkshopError::ActorPanicked(self.actor))));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_reports_result_once() {
        let (tx, rx) = channel::unbounded();
        OutcomeGuard::new(ActorId::elf(1), tx).report(Ok(()));

        let outcomes: Vec<_> = rx.iter().collect();
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], (actor, Ok(())) if actor == ActorId::elf(1)));
    }

    #[test]
    fn test_guard_reports_panic() {
        let (tx, rx) = channel::unbounded();
        let handle = thread::spawn(move || {
            let _guard = OutcomeGuard::new(ActorId::reindeer(2), tx);
            panic!("reindeer tripped");
        });
        assert!(handle.join().is_err());

        let outcomes: Vec<_> = rx.iter().collect();
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(
            outcomes[0].1,
            Err(WorkshopError::ActorPanicked(actor)) if actor == ActorId::reindeer(2)
        ));
    }

    #[test]
    fn test_real_error_wins_over_cancellation() {
        let workshop = Workshop::new(
            crate::core::Parameters::new(1, 1, 0, 0).unwrap(),
            crate::core::TimeUnit::Micros,
            Box::new(crate::workshop::MemorySink::new()),
        );

        let first = record_failure(&workshop, None, ActorId::SANTA, WorkshopError::Cancelled);
        assert!(first.is_cancellation());
        assert!(workshop.signals().is_cancelled());

        let second = record_failure(
            &workshop,
            Some(first),
            ActorId::elf(1),
            WorkshopError::Journal(io::Error::other("disk full")),
        );
        assert!(matches!(second, WorkshopError::Journal(_)));

        let third = record_failure(
            &workshop,
            Some(second),
            ActorId::reindeer(1),
            WorkshopError::Cancelled,
        );
        assert!(matches!(third, WorkshopError::Journal(_)));
    }
}
