//! Build errors for state machine and rule builders.

use thiserror::Error;

/// Errors that can occur when building state machines and rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Rule source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Rule event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Rule target state not specified. Call .to(state)")]
    MissingToState,
}
