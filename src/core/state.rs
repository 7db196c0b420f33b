//! Process-wide shutdown state.
//!
//! - `SHUTDOWN`: Has shutdown been requested? (Ctrl+C received)
//! - `SIGNALS`: Signal set of the running workshop, closed on Ctrl+C so
//!   every blocked actor unwinds and gets joined.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use crate::sync::SignalSet;

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Signals of the running workshop, cancelled on shutdown
static SIGNALS: OnceLock<Arc<SignalSet>> = OnceLock::new();

/// Setup the global Ctrl+C handler. Call once at program start
///
/// - Before `register_signals()`: nothing is running yet, exit immediately
/// - After `register_signals()`: cancel the protocol, the supervisor joins
///   every actor and reports the cancellation
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        if let Some(signals) = SIGNALS.get() {
            crate::log!("workshop"; "interrupted, cancelling actors...");
            signals.cancel();
        } else {
            std::process::exit(1);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Register the signal set of the workshop about to run
pub fn register_signals(signals: Arc<SignalSet>) {
    let _ = SIGNALS.set(signals);
}

/// Check if shutdown has been requested
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}
