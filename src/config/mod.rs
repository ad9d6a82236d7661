//! Data-described transition tables.
//!
//! A [`MachineConfig`] holds the hook-free part of a machine: the initial
//! state and the ordered `(from, event, to)` table. Guards and actions are
//! code, so they are attached afterwards through the builder.

use crate::builder::StateMachineBuilder;
use crate::core::{Event, State};
use crate::engine::{StateMachine, TransitionRule};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// One hook-free table row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig<S, E> {
    pub from: S,
    pub event: E,
    pub to: S,
}

/// Serializable description of a machine.
///
/// # Example
///
/// ```rust
/// use table_fsm::config::MachineConfig;
///
/// let config: MachineConfig<String, String> = MachineConfig::from_json(
///     r#"{
///         "initial": "S0",
///         "rules": [
///             { "from": "S0", "event": "go", "to": "S1" },
///             { "from": "S1", "event": "back", "to": "S0" }
///         ]
///     }"#,
/// )
/// .unwrap();
///
/// let machine = config.build();
/// machine.step("go").unwrap();
/// assert_eq!(machine.current_state(), "S1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig<S, E> {
    pub initial: S,
    /// Rows in match-priority order
    #[serde(default = "Vec::new")]
    pub rules: Vec<RuleConfig<S, E>>,
}

impl<S, E> MachineConfig<S, E>
where
    S: State + DeserializeOwned,
    E: Event + DeserializeOwned,
{
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S: State, E: Event> MachineConfig<S, E> {
    /// Builder preloaded with the initial state and every row, in order.
    ///
    /// Rules added to the returned builder rank below the config rows.
    pub fn into_builder(self) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new()
            .initial(self.initial)
            .rules(self.rules.into_iter().map(TransitionRule::from).collect())
    }

    /// Build a machine straight from the table.
    pub fn build(self) -> StateMachine<S, E> {
        let rules = self.rules.into_iter().map(TransitionRule::from).collect();
        StateMachine::new(self.initial, rules)
    }
}

impl<S: State, E: Event> From<RuleConfig<S, E>> for TransitionRule<S, E> {
    fn from(row: RuleConfig<S, E>) -> Self {
        TransitionRule::new(row.from, row.event, row.to)
    }
}
