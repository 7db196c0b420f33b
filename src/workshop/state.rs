//! Shared workshop counters.
//!
//! All fields sit behind one state lock and are only reachable through
//! compound operations, one per protocol step. Critical sections are pure
//! arithmetic; the only thing ever done while holding the lock is the
//! santa announcement callback of [`SharedState::decide`], which takes the
//! journal lock (state lock is always taken first).

use parking_lot::Mutex;

/// Elves served together in one help round.
pub const HELP_GROUP_SIZE: usize = 3;

#[derive(Debug)]
struct Counters {
    waiting_elves: usize,
    home_reindeer: usize,
    workshop_open: bool,
    help_group_remaining: usize,
}

/// Point-in-time copy of the counters, for tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub waiting_elves: usize,
    pub home_reindeer: usize,
    pub workshop_open: bool,
    pub help_group_remaining: usize,
}

/// Result of an elf asking to join the help queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Workshop already closed, the elf goes on holiday.
    Closed,
    /// Elf is waiting; `group_complete` when it was the third one.
    Joined { group_complete: bool },
}

/// What santa does after waking up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// All reindeer are home: workshop closed, `stragglers` elves to send away.
    Close { stragglers: usize },
    /// A full group of elves is waiting and has been admitted to a round.
    Help,
    /// Nothing to do.
    Idle,
}

#[derive(Debug)]
pub struct SharedState {
    counters: Mutex<Counters>,
    reindeer_total: usize,
}

impl SharedState {
    pub fn new(reindeer_total: usize) -> Self {
        Self {
            counters: Mutex::new(Counters {
                waiting_elves: 0,
                home_reindeer: 0,
                workshop_open: true,
                help_group_remaining: 0,
            }),
            reindeer_total,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let c = self.counters.lock();
        Snapshot {
            waiting_elves: c.waiting_elves,
            home_reindeer: c.home_reindeer,
            workshop_open: c.workshop_open,
            help_group_remaining: c.help_group_remaining,
        }
    }

    pub fn is_open(&self) -> bool {
        self.counters.lock().workshop_open
    }

    /// Enter the help queue unless the workshop is closed.
    ///
    /// Callers hold an `elf_gate` permit, so the queue never exceeds
    /// [`HELP_GROUP_SIZE`].
    pub fn try_join_help_group(&self) -> JoinOutcome {
        let mut c = self.counters.lock();
        if !c.workshop_open {
            return JoinOutcome::Closed;
        }
        debug_assert!(c.waiting_elves < HELP_GROUP_SIZE);
        c.waiting_elves += 1;
        JoinOutcome::Joined {
            group_complete: c.waiting_elves == HELP_GROUP_SIZE,
        }
    }

    /// Leave the active help round. Returns `true` for the last elf out.
    pub fn leave_help_group(&self) -> bool {
        let mut c = self.counters.lock();
        c.help_group_remaining = c.help_group_remaining.saturating_sub(1);
        c.waiting_elves = c.waiting_elves.saturating_sub(1);
        c.help_group_remaining == 0
    }

    /// Count a reindeer back from holiday. Returns `true` once all are home.
    pub fn mark_reindeer_home(&self) -> bool {
        let mut c = self.counters.lock();
        c.home_reindeer += 1;
        c.home_reindeer == self.reindeer_total
    }

    /// Count a reindeer out as hitched. Returns `true` for the last one.
    pub fn mark_reindeer_hitched(&self) -> bool {
        let mut c = self.counters.lock();
        c.home_reindeer = c.home_reindeer.saturating_sub(1);
        c.home_reindeer == 0
    }

    /// Santa's decision step, evaluated atomically.
    ///
    /// Closing beats helping. The transition is applied before `announce`
    /// runs, and `announce` runs with the state lock still held so its
    /// journal line precedes anything an actor can observe afterwards. If
    /// `announce` fails the transition stays applied.
    pub fn decide<E>(
        &self,
        announce: impl FnOnce(Decision) -> Result<(), E>,
    ) -> Result<Decision, E> {
        let mut c = self.counters.lock();
        let decision = if c.home_reindeer == self.reindeer_total {
            c.workshop_open = false;
            Decision::Close {
                stragglers: c.waiting_elves,
            }
        } else if c.waiting_elves == HELP_GROUP_SIZE && c.workshop_open {
            c.help_group_remaining = HELP_GROUP_SIZE;
            Decision::Help
        } else {
            Decision::Idle
        };
        announce(decision)?;
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn decide(state: &SharedState) -> Decision {
        state.decide(|_| Ok::<_, Infallible>(())).unwrap()
    }

    #[test]
    fn test_initial_snapshot() {
        let state = SharedState::new(2);
        assert_eq!(
            state.snapshot(),
            Snapshot {
                waiting_elves: 0,
                home_reindeer: 0,
                workshop_open: true,
                help_group_remaining: 0,
            }
        );
    }

    #[test]
    fn test_third_elf_completes_group() {
        let state = SharedState::new(1);
        assert_eq!(
            state.try_join_help_group(),
            JoinOutcome::Joined {
                group_complete: false
            }
        );
        assert_eq!(
            state.try_join_help_group(),
            JoinOutcome::Joined {
                group_complete: false
            }
        );
        assert_eq!(
            state.try_join_help_group(),
            JoinOutcome::Joined {
                group_complete: true
            }
        );
        assert_eq!(state.snapshot().waiting_elves, 3);
    }

    #[test]
    fn test_help_round_drains_to_zero() {
        let state = SharedState::new(1);
        for _ in 0..HELP_GROUP_SIZE {
            state.try_join_help_group();
        }
        assert_eq!(decide(&state), Decision::Help);
        assert_eq!(state.snapshot().help_group_remaining, 3);

        assert!(!state.leave_help_group());
        assert!(!state.leave_help_group());
        assert!(state.leave_help_group());

        let snapshot = state.snapshot();
        assert_eq!(snapshot.waiting_elves, 0);
        assert_eq!(snapshot.help_group_remaining, 0);
        assert!(snapshot.workshop_open);
    }

    #[test]
    fn test_closing_beats_helping() {
        let state = SharedState::new(2);
        for _ in 0..HELP_GROUP_SIZE {
            state.try_join_help_group();
        }
        assert!(!state.mark_reindeer_home());
        assert!(state.mark_reindeer_home());

        assert_eq!(decide(&state), Decision::Close { stragglers: 3 });
        assert!(!state.is_open());
        assert_eq!(state.snapshot().help_group_remaining, 0);
    }

    #[test]
    fn test_closed_workshop_refuses_elves() {
        let state = SharedState::new(1);
        state.try_join_help_group();
        state.mark_reindeer_home();
        assert_eq!(decide(&state), Decision::Close { stragglers: 1 });

        assert_eq!(state.try_join_help_group(), JoinOutcome::Closed);
        assert_eq!(state.snapshot().waiting_elves, 1);
    }

    #[test]
    fn test_incomplete_group_is_idle() {
        let state = SharedState::new(3);
        state.try_join_help_group();
        state.try_join_help_group();
        state.mark_reindeer_home();
        assert_eq!(decide(&state), Decision::Idle);
        assert!(state.is_open());
    }

    #[test]
    fn test_last_reindeer_hitched() {
        let state = SharedState::new(2);
        state.mark_reindeer_home();
        state.mark_reindeer_home();
        assert!(!state.mark_reindeer_hitched());
        assert!(state.mark_reindeer_hitched());
        assert_eq!(state.snapshot().home_reindeer, 0);
    }

    #[test]
    fn test_announce_sees_decision_and_errors_propagate() {
        let state = SharedState::new(1);
        state.mark_reindeer_home();

        let result = state.decide(|decision| {
            assert_eq!(decision, Decision::Close { stragglers: 0 });
            Err("sink failed")
        });
        assert_eq!(result, Err("sink failed"));
        assert!(!state.is_open());
    }
}
