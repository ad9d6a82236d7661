//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::rule::TransitionRuleBuilder;
use crate::core::{Event, State};
use crate::engine::{StateMachine, TransitionRule};

/// Builder for constructing state machines with a fluent API.
///
/// Rules keep the order they were added in, which is their match priority.
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    rules: Vec<TransitionRule<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rule(mut self, builder: TransitionRuleBuilder<S, E>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: TransitionRule<S, E>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: Vec<TransitionRule<S, E>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the state machine.
    /// Only the initial state is required; an empty table is accepted.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(StateMachine::new(initial, self.rules))
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
