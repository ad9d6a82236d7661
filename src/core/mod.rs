//! Core vocabulary of the engine.
//!
//! This module contains the value types every machine is built from:
//! - States via the `State` trait
//! - Event labels via the `Event` trait
//! - Zero-argument `Guard` predicates and post-transition `Action`s

mod action;
mod event;
mod guard;
mod state;

pub use action::Action;
pub use event::Event;
pub use guard::Guard;
pub use state::State;
