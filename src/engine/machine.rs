//! Thread-safe, table-driven state machine.

use crate::core::{Event, State};
use crate::engine::rule::{TransitionError, TransitionRule};
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::fmt::{self, Debug};

/// State machine driven by an ordered, immutable rule table.
///
/// The current state lives behind a lock owned by the machine, so
/// independent machines never contend with each other. `step` and `reset`
/// hold the write lock for their whole duration (guard and action
/// included); `current_state` takes the read lock.
///
/// Guards and actions must not call back into the same machine: the lock is
/// not re-entrant and doing so deadlocks.
pub struct StateMachine<S: State, E: Event> {
    current: RwLock<S>,
    initial: S,
    rules: Vec<TransitionRule<S, E>>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in `initial`. Rule order is match priority.
    ///
    /// The table is not validated: duplicates, self-loops and unreachable
    /// states are all accepted.
    pub fn new(initial: S, rules: Vec<TransitionRule<S, E>>) -> Self {
        Self {
            current: RwLock::new(initial.clone()),
            initial,
            rules,
        }
    }

    /// Get the last committed state
    pub fn current_state(&self) -> S {
        self.current.read().clone()
    }

    /// Get the construction-time state used by `reset`
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Get the rule table in priority order
    pub fn rules(&self) -> &[TransitionRule<S, E>] {
        &self.rules
    }

    /// Check if the current state is final
    pub fn is_final(&self) -> bool {
        self.current.read().is_final()
    }

    /// Events with at least one rule leaving the current state, in rule order.
    ///
    /// Guards are not evaluated, so a listed event may still be rejected.
    pub fn available_events(&self) -> Vec<E> {
        let current = self.current.read();
        let mut events: Vec<E> = Vec::new();
        for rule in self.rules.iter().filter(|rule| rule.from == *current) {
            if !events.contains(&rule.event) {
                events.push(rule.event.clone());
            }
        }
        events
    }

    /// Return to the initial state. Runs no guard or action.
    pub fn reset(&self) {
        let mut current = self.current.write();
        tracing::debug!(from = current.name(), to = self.initial.name(), "machine reset");
        *current = self.initial.clone();
    }

    /// Feed one event to the machine.
    ///
    /// The first rule matching the current state and `event` is selected.
    /// If it has a guard, the guard is evaluated exactly once; a `false`
    /// result fails with [`TransitionError::GuardRejected`] and later rules
    /// are not consulted. Otherwise the state moves to `rule.to` and the
    /// rule's action, if any, runs before `step` returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use table_fsm::{StateMachine, TransitionError, TransitionRule};
    ///
    /// let machine = StateMachine::new(
    ///     "S0",
    ///     vec![
    ///         TransitionRule::new("S0", "go", "S1"),
    ///         TransitionRule::new("S1", "back", "S0"),
    ///     ],
    /// );
    ///
    /// machine.step("go").unwrap();
    /// assert_eq!(machine.current_state(), "S1");
    ///
    /// let err = machine.step("go").unwrap_err();
    /// assert!(matches!(err, TransitionError::InvalidTransition { .. }));
    /// assert_eq!(machine.current_state(), "S1");
    /// ```
    pub fn step<Q>(&self, event: &Q) -> Result<(), TransitionError>
    where
        E: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        let mut current = self.current.write();

        let Some(rule) = self.rules.iter().find(|rule| rule.matches(&current, event)) else {
            tracing::trace!(state = current.name(), event = ?event, "no matching transition");
            return Err(TransitionError::InvalidTransition {
                from: current.name().to_string(),
                event: format!("{:?}", event),
            });
        };

        if let Some(guard) = &rule.guard {
            if !guard.check() {
                tracing::debug!(
                    from = current.name(),
                    to = rule.to.name(),
                    event = ?event,
                    "guard rejected transition"
                );
                return Err(TransitionError::GuardRejected {
                    from: current.name().to_string(),
                    to: rule.to.name().to_string(),
                    event: format!("{:?}", event),
                });
            }
        }

        let from = std::mem::replace(&mut *current, rule.to.clone());
        tracing::debug!(
            from = from.name(),
            to = rule.to.name(),
            event = ?event,
            "transition committed"
        );

        if let Some(action) = &rule.action {
            action.run();
        }

        Ok(())
    }
}

impl<S: State, E: Event> Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &*self.current.read())
            .field("initial", &self.initial)
            .field("rules", &self.rules.len())
            .finish()
    }
}
