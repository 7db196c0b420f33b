//! Journal Event Definitions
//!
//! One variant per line an actor can write to the journal.
//!
//! ```text
//! Santa --Sleeping/Helping/Closing/ChristmasStarted--> Journal
//! Elf   --Started/NeedHelp/GetHelp/Holiday---------> Journal
//! RD    --Started/ReturnHome/Hitched---------------> Journal
//! ```

use std::fmt;

// =============================================================================
// Santa
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SantaEvent {
    Sleeping,
    Helping,
    Closing,
    ChristmasStarted,
}

impl SantaEvent {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Sleeping => "going to sleep",
            Self::Helping => "helping elves",
            Self::Closing => "closing workshop",
            Self::ChristmasStarted => "Christmas started",
        }
    }
}

// =============================================================================
// Elf
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfEvent {
    Started,
    NeedHelp,
    GetHelp,
    /// Terminal event of every elf
    Holiday,
}

impl ElfEvent {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::NeedHelp => "need help",
            Self::GetHelp => "get help",
            Self::Holiday => "taking holidays",
        }
    }
}

// =============================================================================
// Reindeer
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReindeerEvent {
    Started,
    ReturnHome,
    /// Terminal event of every reindeer
    Hitched,
}

impl ReindeerEvent {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Started => "rstarted",
            Self::ReturnHome => "return home",
            Self::Hitched => "get hitched",
        }
    }
}

// =============================================================================
// Event
// =============================================================================

/// A journal event tagged with the actor that emitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Santa(SantaEvent),
    Elf(u16, ElfEvent),
    Reindeer(u16, ReindeerEvent),
}

impl Event {
    pub const fn message(&self) -> &'static str {
        match *self {
            Self::Santa(event) => event.message(),
            Self::Elf(_, event) => event.message(),
            Self::Reindeer(_, event) => event.message(),
        }
    }
}

/// Journal body without the sequence prefix, e.g. `Elf 3: need help`.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Santa(_) => write!(f, "Santa: {}", self.message()),
            Self::Elf(id, _) => write!(f, "Elf {id}: {}", self.message()),
            Self::Reindeer(id, _) => write!(f, "RD {id}: {}", self.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_bodies() {
        assert_eq!(
            Event::Santa(SantaEvent::Sleeping).to_string(),
            "Santa: going to sleep"
        );
        assert_eq!(
            Event::Santa(SantaEvent::ChristmasStarted).to_string(),
            "Santa: Christmas started"
        );
        assert_eq!(
            Event::Elf(12, ElfEvent::Holiday).to_string(),
            "Elf 12: taking holidays"
        );
        assert_eq!(
            Event::Reindeer(4, ReindeerEvent::Started).to_string(),
            "RD 4: rstarted"
        );
        assert_eq!(
            Event::Reindeer(4, ReindeerEvent::Hitched).to_string(),
            "RD 4: get hitched"
        );
    }
}
