//! The transition engine.
//!
//! A [`StateMachine`] owns its current state and an ordered, read-only list
//! of [`TransitionRule`]s. Each `step` scans the rules in order, checks the
//! first match's guard, commits the new state and runs the action, all as
//! one unit under the machine's write lock.

mod machine;
mod rule;

pub use machine::StateMachine;
pub use rule::{TransitionError, TransitionRule};
