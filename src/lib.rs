//! Table FSM: a table-driven, thread-safe finite state machine engine
//!
//! A machine is an initial state plus an ordered list of transition rules.
//! Feeding it an event selects the first rule leaving the current state on
//! that event, checks the rule's guard, commits the new state and runs the
//! rule's action. The whole sequence is one atomic unit with respect to other
//! callers sharing the machine.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: small comparable values (`&str`, `String`, enums)
//! - **Guards**: zero-argument predicates that can veto a matched rule
//! - **Actions**: zero-argument procedures run after a transition commits
//! - **Rule order**: the first matching rule wins; no fall-through on rejection
//!
//! Guards and actions read whatever they capture rather than a state snapshot.
//! They may have side effects, and they must not call back into the machine
//! that is running them.
//!
//! # Example
//!
//! ```rust
//! use table_fsm::{StateMachine, TransitionError, TransitionRule};
//!
//! let machine = StateMachine::new(
//!     "S0",
//!     vec![
//!         TransitionRule::new("S0", '0', "S0"),
//!         TransitionRule::new("S0", '1', "S1"),
//!         TransitionRule::new("S1", '0', "S2"),
//!         TransitionRule::new("S1", '1', "S0"),
//!         TransitionRule::new("S2", '0', "S1"),
//!         TransitionRule::new("S2", '1', "S2"),
//!     ],
//! );
//!
//! for bit in "1101".chars() {
//!     machine.step(&bit).unwrap();
//! }
//! assert_eq!(machine.current_state(), "S1");
//!
//! assert!(matches!(
//!     machine.step(&'2'),
//!     Err(TransitionError::InvalidTransition { .. })
//! ));
//!
//! machine.reset();
//! assert_eq!(machine.current_state(), "S0");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Action, Event, Guard, State};
pub use builder::{BuildError, StateMachineBuilder, TransitionRuleBuilder};
pub use config::{ConfigError, MachineConfig};
pub use engine::{StateMachine, TransitionError, TransitionRule};
