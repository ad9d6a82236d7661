//! Transition rules and step errors.

use crate::core::{Action, Event, Guard, State};
use std::borrow::Borrow;

/// Errors reported by a failed `step`.
///
/// Both kinds leave the machine's state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition from state '{from}' on event {event}")]
    InvalidTransition { from: String, event: String },

    #[error("Guard rejected transition from '{from}' to '{to}' on event {event}")]
    GuardRejected {
        from: String,
        to: String,
        event: String,
    },
}

/// A directed, event-labelled edge of the state graph.
///
/// Rules are immutable once handed to a machine. Hooks are shared, so
/// cloning a rule is cheap.
#[derive(Clone, Debug)]
pub struct TransitionRule<S: State, E: Event> {
    pub from: S,
    pub event: E,
    pub to: S,
    /// Checked after matching; `None` always allows the transition.
    pub guard: Option<Guard>,
    /// Run after the new state is committed; `None` does nothing.
    pub action: Option<Action>,
}

impl<S: State, E: Event> TransitionRule<S, E> {
    /// Plain rule with no guard and no action.
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from,
            event,
            to,
            guard: None,
            action: None,
        }
    }

    /// Check whether this rule applies to `current` and `event` (pure, hooks untouched)
    pub fn matches<Q>(&self, current: &S, event: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.from == *current && <E as Borrow<Q>>::borrow(&self.event) == event
    }
}
