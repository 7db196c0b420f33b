//! Random work and holiday delays.

use std::time::Duration;

use rand::Rng;

use crate::core::TimeUnit;

/// Uniform random duration in `[0, max)` units; zero when `max == 0`.
pub fn random_delay(max: u32, unit: TimeUnit) -> Duration {
    if max == 0 {
        return Duration::ZERO;
    }
    let amount = rand::thread_rng().gen_range(0..max);
    unit.duration(u64::from(amount))
}

/// Sleep for a random delay in `[0, max)` units.
#[inline]
pub fn pause(max: u32, unit: TimeUnit) {
    let delay = random_delay(max, unit);
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
