//! Parsing of the textual transition syntax.

use regex::Regex;

use super::Transition;
use crate::error::Error;
use crate::flyweight::Registry;

/// The pattern behind the default `CURRENT + INPUT = NEXT` syntax.
pub const DEFAULT_PATTERN: &str =
    r"^(?P<current_state>[^+]+) \+ (?P<input>[^=]+) = (?P<next_state>.+)$";

/// A compiled pattern for turning transition strings into [`Transition`]s.
///
/// The pattern must expose three named capture groups — `current_state`,
/// `input`, and `next_state` — whose captures are resolved through a
/// [`Registry`]. Patterns are plain values: construct one, share it, replace
/// it by constructing another. A pattern that fails to compile never existed,
/// so it cannot clobber the one you were already using.
///
/// # Example
///
/// ```rust
/// use gearshift::{Registry, TransitionPattern};
///
/// let registry = Registry::new();
/// let pattern = TransitionPattern::default();
///
/// let transition = pattern.parse(&registry, "CLOSED + OPEN = OPENED")?;
///
/// assert_eq!(transition.current_state(), &registry.state("CLOSED"));
/// assert_eq!(transition.input(), &registry.input("OPEN"));
/// assert_eq!(transition.next_state(), &registry.state("OPENED"));
/// # Ok::<(), gearshift::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct TransitionPattern {
    regex: Regex,
}

impl TransitionPattern {
    /// Compile a custom pattern.
    ///
    /// Fails with [`Error::InvalidPattern`] when `pattern` is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        Ok(Self { regex })
    }

    /// The source text of the compiled pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Parse one transition string, resolving the captured names through
    /// `registry`.
    ///
    /// Fails with [`Error::PatternMismatch`] when `text` does not match the
    /// pattern or the pattern did not capture all three named groups.
    pub fn parse(&self, registry: &Registry, text: &str) -> Result<Transition, Error> {
        let mismatch = || Error::PatternMismatch {
            text: text.to_owned(),
            pattern: self.regex.as_str().to_owned(),
        };

        let captures = self.regex.captures(text).ok_or_else(mismatch)?;

        let current_state = captures.name("current_state").ok_or_else(mismatch)?;
        let input = captures.name("input").ok_or_else(mismatch)?;
        let next_state = captures.name("next_state").ok_or_else(mismatch)?;

        Ok(Transition::new(
            registry.state(current_state.as_str()),
            registry.input(input.as_str()),
            registry.state(next_state.as_str()),
        ))
    }
}

impl Default for TransitionPattern {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN).expect("default pattern is a valid regular expression")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_syntax() {
        let registry = Registry::new();
        let pattern = TransitionPattern::default();

        let transition = pattern.parse(&registry, "A + B = C").unwrap();

        assert_eq!(transition.current_state(), &registry.state("A"));
        assert_eq!(transition.input(), &registry.input("B"));
        assert_eq!(transition.next_state(), &registry.state("C"));
    }

    #[test]
    fn parses_multi_word_names() {
        let registry = Registry::new();
        let pattern = TransitionPattern::default();

        let transition = pattern
            .parse(&registry, "WHITES_TURN + WHITE MOVES = BLACKS_TURN")
            .unwrap();

        assert_eq!(transition.input(), &registry.input("WHITE MOVES"));
    }

    #[test]
    fn mismatching_string_is_rejected() {
        let registry = Registry::new();
        let pattern = TransitionPattern::default();

        let error = pattern.parse(&registry, "not a transition").unwrap_err();

        match error {
            Error::PatternMismatch { text, pattern } => {
                assert_eq!(text, "not a transition");
                assert_eq!(pattern, DEFAULT_PATTERN);
            }
            other => panic!("expected PatternMismatch, got {other:?}"),
        }
    }

    #[test]
    fn pattern_without_named_groups_never_parses() {
        let registry = Registry::new();
        // Compiles fine but captures none of the expected groups.
        let pattern = TransitionPattern::new(r"^.*$").unwrap();

        let error = pattern.parse(&registry, "A + B = C").unwrap_err();

        assert!(matches!(error, Error::PatternMismatch { .. }));
    }

    #[test]
    fn invalid_expression_is_rejected_at_construction() {
        let error = TransitionPattern::new("(unclosed").unwrap_err();

        match error {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn custom_pattern_with_expected_groups_parses() {
        let registry = Registry::new();
        let pattern = TransitionPattern::new(
            r"^(?P<current_state>\w+) --(?P<input>\w+)--> (?P<next_state>\w+)$",
        )
        .unwrap();

        let transition = pattern.parse(&registry, "CLOSED --OPEN--> OPENED").unwrap();

        assert_eq!(transition.next_state(), &registry.state("OPENED"));
    }

    #[test]
    fn as_str_exposes_the_source_pattern() {
        assert_eq!(TransitionPattern::default().as_str(), DEFAULT_PATTERN);
    }
}
