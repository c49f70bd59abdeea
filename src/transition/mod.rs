//! Transition rules, the textual transition syntax, and the lookup table.
//!
//! A [`Transition`] maps a (state, input) pair to a resulting state. A
//! [`TransitionTable`] collects transitions into an immutable O(1) lookup.
//! The convenience syntax `CURRENT + INPUT = NEXT` is parsed by a
//! [`TransitionPattern`], a value type you pass around explicitly instead of
//! mutating process-wide configuration.

mod pattern;
mod table;

pub use pattern::{TransitionPattern, DEFAULT_PATTERN};
pub use table::TransitionTable;

use crate::flyweight::{Input, State};

/// An immutable rule: applying `input` to `current_state` yields `next_state`.
///
/// # Example
///
/// ```rust
/// use gearshift::{Registry, Transition};
///
/// let registry = Registry::new();
///
/// let transition = Transition::new(
///     registry.state("CLOSED"),
///     registry.input("OPEN"),
///     registry.state("OPENED"),
/// );
///
/// assert_eq!(transition.current_state(), &registry.state("CLOSED"));
/// assert_eq!(transition.input(), &registry.input("OPEN"));
/// assert_eq!(transition.next_state(), &registry.state("OPENED"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    current_state: State,
    input: Input,
    next_state: State,
}

impl Transition {
    /// Create a transition from its three parts.
    pub fn new(current_state: State, input: Input, next_state: State) -> Self {
        Self {
            current_state,
            input,
            next_state,
        }
    }

    /// The state from which this transition begins.
    pub fn current_state(&self) -> &State {
        &self.current_state
    }

    /// The input that triggers this transition.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// The state in which this transition results.
    pub fn next_state(&self) -> &State {
        &self.next_state
    }
}
