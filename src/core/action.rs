//! Post-transition actions.

use std::fmt;
use std::sync::Arc;

/// Side-effecting procedure run once after a transition commits.
///
/// Actions run synchronously inside `step`, still under the machine's
/// write lock. Any shared data they touch must be synchronized by the caller.
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use table_fsm::core::Action;
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&hits);
/// let action = Action::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// action.run();
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Action {
    procedure: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    /// Wrap a zero-argument procedure.
    pub fn new<F>(procedure: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Action {
            procedure: Arc::new(procedure),
        }
    }

    /// Invoke the procedure.
    pub fn run(&self) {
        (self.procedure)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}
