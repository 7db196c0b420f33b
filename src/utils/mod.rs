//! Small helpers shared by the actors and the supervisor.

pub mod delay;
pub mod plural;
