//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, Guard, State};
use crate::engine::TransitionRule;

/// Builder for constructing rules with a fluent API.
pub struct TransitionRuleBuilder<S: State, E: Event> {
    from: Option<S>,
    event: Option<E>,
    to: Option<S>,
    guard: Option<Guard>,
    action: Option<Action>,
}

impl<S: State, E: Event> TransitionRuleBuilder<S, E> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Add an action (optional).
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an action using a closure (optional).
    pub fn then<F>(mut self, procedure: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Action::new(procedure));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<TransitionRule<S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(TransitionRule {
            from,
            event,
            to,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State, E: Event> Default for TransitionRuleBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
