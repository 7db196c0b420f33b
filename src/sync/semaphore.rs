//! Closable counting semaphore.
//!
//! A permit counter behind a `parking_lot` mutex with a condition variable
//! for blocked waiters. `close()` turns every pending and future `acquire`
//! into `Err(Closed)`, which is how a run is cancelled without leaving
//! threads blocked forever.

use parking_lot::{Condvar, Mutex};
use thiserror::Error;

/// Returned by [`Semaphore::acquire`] once the semaphore has been closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("signal closed")]
pub struct Closed;

#[derive(Debug)]
struct Permits {
    available: usize,
    closed: bool,
}

/// Counting semaphore with blocking, uncancellable-by-timeout waits.
#[derive(Debug)]
pub struct Semaphore {
    permits: Mutex<Permits>,
    notify: Condvar,
}

impl Semaphore {
    pub const fn new(initial: usize) -> Self {
        Self {
            permits: Mutex::new(Permits {
                available: initial,
                closed: false,
            }),
            notify: Condvar::new(),
        }
    }

    /// Block until a permit is available and take it.
    ///
    /// Closing wins over available permits: a closed semaphore never hands
    /// out another permit.
    pub fn acquire(&self) -> Result<(), Closed> {
        let mut permits = self.permits.lock();
        loop {
            if permits.closed {
                return Err(Closed);
            }
            if permits.available > 0 {
                permits.available -= 1;
                return Ok(());
            }
            self.notify.wait(&mut permits);
        }
    }

    /// Post one permit.
    #[inline]
    pub fn release(&self) {
        self.release_many(1);
    }

    /// Post `n` permits at once.
    pub fn release_many(&self, n: usize) {
        if n == 0 {
            return;
        }
        self.permits.lock().available += n;
        if n == 1 {
            self.notify.notify_one();
        } else {
            self.notify.notify_all();
        }
    }

    /// Close the semaphore and wake every waiter.
    pub fn close(&self) {
        self.permits.lock().closed = true;
        self.notify.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.permits.lock().closed
    }

    /// Permits currently available.
    pub fn available(&self) -> usize {
        self.permits.lock().available
    }
}
