//! The contract between the engine and the objects it transitions.

use crate::error::Error;
use crate::flyweight::State;

/// Accessor contract for an object whose state the engine manages.
///
/// The engine never mutates an object directly; the commit happens through
/// whichever hook sits on the global `on` channel (the built-in
/// [`ChangesState`](crate::ChangesState) by default). Most implementors embed
/// a [`StateSlot`] and delegate, which the [`impl_stateful!`](crate::impl_stateful)
/// macro writes out for you.
///
/// # Example
///
/// ```rust
/// use gearshift::{impl_stateful, Registry, StateSlot, Stateful};
///
/// struct Document {
///     title: String,
///     state: StateSlot,
/// }
///
/// impl_stateful!(Document { state });
///
/// let registry = Registry::new();
/// let mut document = Document {
///     title: "Q3 report".into(),
///     state: StateSlot::new(),
/// };
///
/// assert!(!document.has_current_state());
/// document.set_current_state(registry.state("DRAFT"));
/// assert_eq!(document.current_state_name().unwrap(), "DRAFT");
/// ```
pub trait Stateful {
    /// Whether a current state has ever been set.
    fn has_current_state(&self) -> bool;

    /// The object's current state, or [`Error::StateNotSet`] if none was set.
    fn current_state(&self) -> Result<&State, Error>;

    /// The name of the object's current state.
    fn current_state_name(&self) -> Result<&str, Error> {
        self.current_state().map(State::name)
    }

    /// Replace the object's current state.
    fn set_current_state(&mut self, state: State);
}

/// A ready-made holder for an object's current state.
///
/// Embed one in an application type and delegate [`Stateful`] to it, or use
/// it directly as a minimal stateful object in tests and demos.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateSlot {
    current: Option<State>,
}

impl StateSlot {
    /// Create a slot with no state set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stateful for StateSlot {
    fn has_current_state(&self) -> bool {
        self.current.is_some()
    }

    fn current_state(&self) -> Result<&State, Error> {
        self.current.as_ref().ok_or(Error::StateNotSet)
    }

    fn set_current_state(&mut self, state: State) {
        self.current = Some(state);
    }
}

/// Implement [`Stateful`] for a type by delegating to a [`StateSlot`] field.
///
/// # Example
///
/// ```rust
/// use gearshift::{impl_stateful, StateSlot};
///
/// struct Order {
///     id: u64,
///     state: StateSlot,
/// }
///
/// impl_stateful!(Order { state });
/// ```
#[macro_export]
macro_rules! impl_stateful {
    ($type:ty { $field:ident }) => {
        impl $crate::Stateful for $type {
            fn has_current_state(&self) -> bool {
                $crate::Stateful::has_current_state(&self.$field)
            }

            fn current_state(&self) -> ::std::result::Result<&$crate::State, $crate::Error> {
                $crate::Stateful::current_state(&self.$field)
            }

            fn set_current_state(&mut self, state: $crate::State) {
                $crate::Stateful::set_current_state(&mut self.$field, state)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flyweight::Registry;

    #[test]
    fn fresh_slot_has_no_state() {
        let slot = StateSlot::new();

        assert!(!slot.has_current_state());
        assert!(matches!(slot.current_state(), Err(Error::StateNotSet)));
        assert!(matches!(slot.current_state_name(), Err(Error::StateNotSet)));
    }

    #[test]
    fn set_state_then_read_it_back() {
        let registry = Registry::new();
        let mut slot = StateSlot::new();

        slot.set_current_state(registry.state("OPENED"));

        assert!(slot.has_current_state());
        assert_eq!(slot.current_state().unwrap(), &registry.state("OPENED"));
        assert_eq!(slot.current_state_name().unwrap(), "OPENED");
    }

    #[test]
    fn set_state_replaces_previous_state() {
        let registry = Registry::new();
        let mut slot = StateSlot::new();

        slot.set_current_state(registry.state("OPENED"));
        slot.set_current_state(registry.state("CLOSED"));

        assert_eq!(slot.current_state_name().unwrap(), "CLOSED");
    }

    #[test]
    fn state_not_set_error_has_expected_message() {
        let slot = StateSlot::new();
        let error = slot.current_state().unwrap_err();

        assert_eq!(
            error.to_string(),
            "cannot get current state for object because no state is set"
        );
    }

    #[test]
    fn macro_delegates_to_embedded_slot() {
        struct Door {
            state: StateSlot,
        }

        impl_stateful!(Door { state });

        let registry = Registry::new();
        let mut door = Door {
            state: StateSlot::new(),
        };

        assert!(!door.has_current_state());
        door.set_current_state(registry.state("LOCKED"));
        assert_eq!(door.current_state_name().unwrap(), "LOCKED");
    }
}
