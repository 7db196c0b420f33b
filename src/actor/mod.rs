//! Actor System for the Workshop
//!
//! Every actor runs on its own thread and decides its next step from the
//! shared counters and blocking signals; nothing schedules them centrally.
//!
//! ```text
//! Elf x E ---(3 waiting)----+                +--(release_elf_group)--> Elf x 3
//!                           +--> Santa ------+
//! Reindeer x R --(all home)-+                +--(release_reindeer)---> Reindeer x R
//! ```
//!
//! # Module Structure
//!
//! - `messages` - Journal events emitted by each role
//! - `santa` - The coordinator's decision loop
//! - `elf` - Work / ask for help loop
//! - `reindeer` - Holiday / hitching pass
//! - `supervisor` - Spawns, watches and joins the actors

mod elf;
pub mod messages;
mod reindeer;
mod santa;
pub mod supervisor;


pub use supervisor::Supervisor;
