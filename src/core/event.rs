//! Event labels.

use std::fmt::Debug;

/// A stimulus label that may trigger a transition.
///
/// Any small comparable value qualifies: string labels, chars, or unit enums.
///
/// ```rust
/// use table_fsm::core::Event;
///
/// fn assert_event<E: Event>() {}
///
/// assert_event::<&'static str>();
/// assert_event::<String>();
/// assert_event::<char>();
/// ```
pub trait Event: Clone + PartialEq + Debug + Send + Sync {}

impl<T> Event for T where T: Clone + PartialEq + Debug + Send + Sync {}
