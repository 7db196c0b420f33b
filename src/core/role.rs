//! Actor roles and stable actor identities.

use std::fmt;

use super::Parameters;

/// The three kinds of actor taking part in the workshop protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Santa,
    Elf,
    Reindeer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Santa => "santa",
            Self::Elf => "elf",
            Self::Reindeer => "reindeer",
        })
    }
}

/// Identity of a single actor.
///
/// Elves and reindeer are numbered from 1 in spawn order; santa is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId {
    pub role: Role,
    pub id: u16,
}

impl ActorId {
    pub const SANTA: Self = Self {
        role: Role::Santa,
        id: 0,
    };

    #[inline]
    pub const fn elf(id: u16) -> Self {
        Self { role: Role::Elf, id }
    }

    #[inline]
    pub const fn reindeer(id: u16) -> Self {
        Self {
            role: Role::Reindeer,
            id,
        }
    }

    /// Every actor of a run, in spawn order: santa, elves, then reindeer.
    pub fn roster(params: &Parameters) -> impl Iterator<Item = Self> {
        std::iter::once(Self::SANTA)
            .chain((1..=params.elves).map(Self::elf))
            .chain((1..=params.reindeer).map(Self::reindeer))
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Santa => write!(f, "{}", self.role),
            _ => write!(f, "{}-{}", self.role, self.id),
        }
    }
}
