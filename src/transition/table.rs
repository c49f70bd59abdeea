//! The (state, input) → next state lookup.

use std::collections::HashMap;

use super::Transition;
use crate::error::Error;
use crate::flyweight::{Input, State};

/// An immutable map from (current state, input) to the resulting state.
///
/// Built once from a list of [`Transition`]s; when two transitions share the
/// same (state, input) key, the last one registered wins silently. That is a
/// deliberate policy, not an oversight: it lets a table be assembled from a
/// base rule set plus overrides. Lookup is O(1) and has no side effects, so
/// a built table can be shared freely for concurrent reads.
///
/// # Example
///
/// ```rust
/// use gearshift::{Registry, TransitionPattern, TransitionTable};
///
/// let registry = Registry::new();
/// let pattern = TransitionPattern::default();
///
/// let table: TransitionTable = ["CLOSED + OPEN = OPENED", "OPENED + CLOSE = CLOSED"]
///     .iter()
///     .map(|line| pattern.parse(&registry, line))
///     .collect::<Result<_, _>>()?;
///
/// let next = table.resolve(&registry.state("CLOSED"), &registry.input("OPEN"))?;
/// assert_eq!(next, registry.state("OPENED"));
/// # Ok::<(), gearshift::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    transitions: HashMap<(String, String), State>,
}

impl TransitionTable {
    /// Build a table from transitions. Later duplicates overwrite earlier
    /// entries.
    pub fn new(transitions: impl IntoIterator<Item = Transition>) -> Self {
        transitions.into_iter().collect()
    }

    /// The state that results from applying `input` to an object currently
    /// in `current_state`.
    ///
    /// Fails with [`Error::UnsupportedTransition`] — carrying the offending
    /// input and state — when the table holds no such entry.
    pub fn resolve(&self, current_state: &State, input: &Input) -> Result<State, Error> {
        self.transitions
            .get(&Self::action_key(current_state, input))
            .cloned()
            .ok_or_else(|| Error::UnsupportedTransition {
                input: input.clone(),
                state: current_state.clone(),
            })
    }

    /// Number of distinct (state, input) entries.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    fn action_key(current_state: &State, input: &Input) -> (String, String) {
        (current_state.name().to_owned(), input.name().to_owned())
    }
}

impl FromIterator<Transition> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        let mut transitions = HashMap::new();

        for transition in iter {
            let key = Self::action_key(transition.current_state(), transition.input());
            transitions.insert(key, transition.next_state().clone());
        }

        Self { transitions }
    }
}

impl Extend<Transition> for TransitionTable {
    fn extend<I: IntoIterator<Item = Transition>>(&mut self, iter: I) {
        for transition in iter {
            let key = Self::action_key(transition.current_state(), transition.input());
            self.transitions.insert(key, transition.next_state().clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flyweight::Registry;
    use crate::transition::TransitionPattern;

    fn parse_all(registry: &Registry, lines: &[&str]) -> TransitionTable {
        let pattern = TransitionPattern::default();
        lines
            .iter()
            .map(|line| pattern.parse(registry, line).unwrap())
            .collect()
    }

    #[test]
    fn resolves_a_registered_pair() {
        let registry = Registry::new();
        let table = parse_all(&registry, &["A + X = B"]);

        let next = table
            .resolve(&registry.state("A"), &registry.input("X"))
            .unwrap();

        assert_eq!(next, registry.state("B"));
    }

    #[test]
    fn unregistered_pair_fails_with_offending_input_and_state() {
        let registry = Registry::new();
        let table = parse_all(&registry, &["CLOSED + OPEN = OPENED"]);

        let error = table
            .resolve(&registry.state("CLOSED"), &registry.input("CLOSE"))
            .unwrap_err();

        assert_eq!(error.to_string(), "Cannot CLOSE a CLOSED object");
        match error {
            Error::UnsupportedTransition { input, state } => {
                assert_eq!(input, registry.input("CLOSE"));
                assert_eq!(state, registry.state("CLOSED"));
            }
            other => panic!("expected UnsupportedTransition, got {other:?}"),
        }
    }

    #[test]
    fn later_duplicate_overwrites_earlier_entry() {
        let registry = Registry::new();
        let table = parse_all(&registry, &["A + X = B", "A + X = C"]);

        let next = table
            .resolve(&registry.state("A"), &registry.input("X"))
            .unwrap();

        assert_eq!(next, registry.state("C"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn resolve_has_no_side_effects() {
        let registry = Registry::new();
        let table = parse_all(&registry, &["A + X = B"]);

        assert!(table
            .resolve(&registry.state("A"), &registry.input("Y"))
            .is_err());

        // A failed lookup changes nothing.
        assert_eq!(table.len(), 1);
        assert!(table
            .resolve(&registry.state("A"), &registry.input("X"))
            .is_ok());
    }

    #[test]
    fn chess_match_sequence_ends_in_expected_state() {
        let registry = Registry::new();
        let table = parse_all(
            &registry,
            &[
                "WHITES_TURN + WHITE_MOVES = BLACKS_TURN",
                "BLACKS_TURN + BLACK_MOVES = WHITES_TURN",
                "WHITES_TURN + CHECKMATE = WHITE_WINS",
                "BLACKS_TURN + CHECKMATE = BLACK_WINS",
                "WHITES_TURN + STALEMATE = DRAW",
                "BLACKS_TURN + STALEMATE = DRAW",
            ],
        );

        let mut current = registry.state("WHITES_TURN");
        for input in ["WHITE_MOVES", "BLACK_MOVES", "WHITE_MOVES"] {
            current = table.resolve(&current, &registry.input(input)).unwrap();
        }

        assert_eq!(current, registry.state("BLACKS_TURN"));
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let registry = Registry::new();
        let table = TransitionTable::default();

        assert!(table.is_empty());
        assert!(table
            .resolve(&registry.state("A"), &registry.input("X"))
            .is_err());
    }
}
