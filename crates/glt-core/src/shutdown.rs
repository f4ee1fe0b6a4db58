//! Cooperative shutdown signalling.
//!
//! The original tool kept a bare process-wide flag that a signal
//! handler flipped on SIGINT/SIGTERM. Here the flag is an explicitly
//! passed token: clone it into every long-running caller and poll
//! [`ShutdownToken::is_running`] between units of work. Signal wiring
//! itself lives outside this layer; whoever installs the handler holds
//! a clone and calls [`ShutdownToken::request_shutdown`] from it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A clonable handle to a shared "keep running" flag.
///
/// Starts in the running state. All clones observe the same flag, so a
/// worker pool can share one token across threads. None of the
/// operations in this layer are long-running, so the layer itself never
/// polls the token; it exists for the callers that loop over it.
#[derive(Clone, Debug)]
pub struct ShutdownToken {
    running: Arc<AtomicBool>,
}

impl ShutdownToken {
    /// Create a new token in the running state.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether work should continue.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Request a cooperative shutdown. Idempotent.
    pub fn request_shutdown(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

impl Default for ShutdownToken {
    fn default() -> Self {
        Self::new()
    }
}
