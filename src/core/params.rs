//! Run parameters: actor counts and delay bounds.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::WorkshopError;

/// Accepted elf counts.
pub const ELVES: RangeInclusive<u16> = 1..=999;
/// Accepted reindeer counts.
pub const REINDEER: RangeInclusive<u16> = 1..=19;
/// Accepted maximum work / holiday durations.
pub const DURATION: RangeInclusive<u32> = 0..=1000;

/// Immutable parameters of one workshop run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    /// Number of elves (E).
    pub elves: u16,
    /// Number of reindeer (R).
    pub reindeer: u16,
    /// Upper bound (exclusive) of an elf's work period (W).
    pub max_work: u32,
    /// Holiday bound (H). Reindeer holiday for less than `H / 2`.
    pub max_holiday: u32,
}

impl Parameters {
    /// Validate and build a parameter set.
    pub fn new(
        elves: u16,
        reindeer: u16,
        max_work: u32,
        max_holiday: u32,
    ) -> Result<Self, WorkshopError> {
        check("elf count", &ELVES, elves)?;
        check("reindeer count", &REINDEER, reindeer)?;
        check("max work duration", &DURATION, max_work)?;
        check("max holiday duration", &DURATION, max_holiday)?;
        Ok(Self {
            elves,
            reindeer,
            max_work,
            max_holiday,
        })
    }

    /// Exclusive upper bound of a reindeer holiday.
    #[inline]
    pub const fn reindeer_holiday(&self) -> u32 {
        self.max_holiday / 2
    }

    /// Total number of actors, santa included.
    #[inline]
    pub const fn actor_count(&self) -> usize {
        1 + self.elves as usize + self.reindeer as usize
    }
}

fn check<T>(name: &str, range: &RangeInclusive<T>, value: T) -> Result<(), WorkshopError>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(WorkshopError::Parameter(format!(
            "{name} must be within {}..={}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

/// Unit of the abstract durations W and H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Micros,
    #[default]
    Millis,
}

impl TimeUnit {
    #[inline]
    pub const fn duration(self, amount: u64) -> Duration {
        match self {
            Self::Micros => Duration::from_micros(amount),
            Self::Millis => Duration::from_millis(amount),
        }
    }
}
