//! Guard predicates for controlling state transitions.
//!
//! Guards take no arguments. They read whatever they close over, so a guard
//! is free to consult (or even mutate) external state. The engine calls a
//! guard at most once per `step`, while holding the machine's write lock.

use std::fmt;
use std::sync::Arc;

/// Predicate that decides whether a matched rule may fire.
///
/// Cloning a guard shares the same underlying closure.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use table_fsm::core::Guard;
///
/// let unlocked = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&unlocked);
/// let guard = Guard::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!guard.check());
/// unlocked.store(true, Ordering::SeqCst);
/// assert!(guard.check());
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a zero-argument predicate.
    ///
    /// The predicate must be fast and must not call back into the machine
    /// that evaluates it.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
