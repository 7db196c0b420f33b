//! Blocking signals used between actors.

mod semaphore;
mod signals;

pub use semaphore::{Closed, Semaphore};
pub use signals::SignalSet;
