//! Flyweight identity model for states and inputs.
//!
//! States and inputs are compared by identity, not by name string. The
//! [`Registry`] is the single source of those identities: it interns one
//! canonical instance per name and category, and mints one wildcard sentinel
//! per category for "match anything" hook registration.
//!
//! The registry is an explicit object rather than hidden global state. Build
//! one at startup and share it (by reference or `Arc`) with everything that
//! needs to name states and inputs; its internals are synchronized, so a
//! shared registry may be populated from multiple threads.

mod input;
mod pool;
mod state;

pub use input::Input;
pub use state::State;

use pool::Pool;

/// Flyweight factory for [`State`]s and [`Input`]s.
///
/// Within one registry, requesting the same name twice returns the same
/// instance, which is what makes identity comparison work everywhere else in
/// the engine. The wildcard sentinels are created lazily, at most once each,
/// with long random hex names that never collide with application names.
///
/// # Example
///
/// ```rust
/// use gearshift::Registry;
///
/// let registry = Registry::new();
///
/// assert_eq!(registry.state("DRAFT"), registry.state("DRAFT"));
/// assert_eq!(registry.any_input(), registry.any_input());
///
/// // States and inputs live in separate namespaces.
/// assert_eq!(registry.state("SUBMIT").name(), registry.input("SUBMIT").name());
/// ```
pub struct Registry {
    states: Pool,
    inputs: Pool,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            states: Pool::new(),
            inputs: Pool::new(),
        }
    }

    /// The canonical [`State`] for `name`, created and cached on first use.
    pub fn state(&self, name: &str) -> State {
        State::from_interned(self.states.intern(name))
    }

    /// The canonical [`Input`] for `name`, created and cached on first use.
    pub fn input(&self, name: &str) -> Input {
        Input::from_interned(self.inputs.intern(name))
    }

    /// The wildcard [`State`], matching any current state during hook
    /// registration. Never a real application state.
    pub fn any_state(&self) -> State {
        State::from_interned(self.states.wildcard())
    }

    /// The wildcard [`Input`], matching any input during hook registration.
    pub fn any_input(&self) -> Input {
        Input::from_interned(self.inputs.wildcard())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_yields_identical_state() {
        let registry = Registry::new();

        assert_eq!(registry.state("WHITES_TURN"), registry.state("WHITES_TURN"));
    }

    #[test]
    fn distinct_names_yield_distinct_states() {
        let registry = Registry::new();

        assert_ne!(registry.state("WHITES_TURN"), registry.state("BLACKS_TURN"));
    }

    #[test]
    fn same_name_yields_identical_input() {
        let registry = Registry::new();

        assert_eq!(registry.input("WHITE_MOVES"), registry.input("WHITE_MOVES"));
    }

    #[test]
    fn wildcards_are_stable() {
        let registry = Registry::new();

        assert_eq!(registry.any_state(), registry.any_state());
        assert_eq!(registry.any_input(), registry.any_input());
    }

    #[test]
    fn wildcard_never_equals_a_named_state() {
        let registry = Registry::new();
        let wildcard = registry.any_state();

        assert_ne!(wildcard, registry.state("OPEN"));
        // Not even when asking for the sentinel's own name.
        assert_ne!(wildcard, registry.state(wildcard.name()));
    }

    #[test]
    fn separate_registries_produce_separate_identities() {
        let one = Registry::new();
        let two = Registry::new();

        assert_ne!(one.state("OPEN"), two.state("OPEN"));
    }

    #[test]
    fn states_and_inputs_can_share_a_name_string() {
        let registry = Registry::new();

        let state = registry.state("RESET");
        let input = registry.input("RESET");

        assert_eq!(state.name(), input.name());
    }
}
