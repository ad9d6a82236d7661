//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state machines
//! with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use rule::TransitionRuleBuilder;

use crate::core::{Event, Guard, State};
use crate::engine::TransitionRule;

/// Create an unconditional rule with no action.
///
/// # Example
///
/// ```
/// use table_fsm::builder::simple_rule;
///
/// let rule = simple_rule("S0", "1", "S1");
/// assert!(rule.matches(&"S0", "1"));
/// ```
pub fn simple_rule<S: State, E: Event>(from: S, event: E, to: S) -> TransitionRule<S, E> {
    TransitionRule::new(from, event, to)
}

/// Create a rule with a guard predicate.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use table_fsm::builder::guarded_rule;
/// use table_fsm::StateMachine;
///
/// let armed = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&armed);
/// let machine = StateMachine::new(
///     "idle",
///     vec![guarded_rule("idle", "fire", "firing", move || flag.load(Ordering::SeqCst))],
/// );
///
/// assert!(machine.step("fire").is_err());
/// armed.store(true, Ordering::SeqCst);
/// assert!(machine.step("fire").is_ok());
/// ```
pub fn guarded_rule<S, E, F>(from: S, event: E, to: S, guard: F) -> TransitionRule<S, E>
where
    S: State,
    E: Event,
    F: Fn() -> bool + Send + Sync + 'static,
{
    TransitionRule {
        guard: Some(Guard::new(guard)),
        ..TransitionRule::new(from, event, to)
    }
}
