//! Core State trait for state machine states.
//!
//! States are plain values: the engine only compares and clones them.
//! Naming and finality are presentation/inspection concerns.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed out by value
/// - `PartialEq`: rule matching compares `rule.from` with the current state
/// - `Debug`: states appear in diagnostics
/// - `Send` + `Sync`: machines are shared across threads
///
/// # Example
///
/// ```rust
/// use table_fsm::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Door {
///     Open,
///     Closed,
///     Welded,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Welded => "Welded",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Welded)
///     }
/// }
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Informational only: the engine still applies rules leaving a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}
