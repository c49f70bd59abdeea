//! Error types surfaced by the engine.
//!
//! Every failure is returned synchronously to the immediate caller; nothing
//! is retried or swallowed internally. Errors raised inside caller-supplied
//! hooks — other than an explicit veto, which is not an error at the hook
//! level — pass through the engine unmodified.

use thiserror::Error;

use crate::context::Context;
use crate::flyweight::{Input, State};
use crate::stateful::Stateful;

/// Boxed error produced by a caller-supplied hook.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can go wrong while defining or executing transitions.
#[derive(Debug, Error)]
pub enum Error {
    /// A stateful object's current state was read before one was ever set.
    #[error("cannot get current state for object because no state is set")]
    StateNotSet,

    /// The transition table has no entry for this (state, input) pair.
    ///
    /// Raised before any hook channel fires, so it is side-effect free.
    #[error("Cannot {} a {} object", .input.name(), .state.name())]
    UnsupportedTransition {
        /// The input that was attempted.
        input: Input,
        /// The object's current state at the time of the attempt.
        state: State,
    },

    /// A hook vetoed the transition. See [`TransitionFailure`].
    #[error(transparent)]
    TransitionFailed(Box<TransitionFailure>),

    /// A transition string did not satisfy the configured pattern.
    #[error("transition string {text:?} does not match the configured pattern {pattern:?}")]
    PatternMismatch {
        /// The string that failed to parse.
        text: String,
        /// The pattern it was matched against.
        pattern: String,
    },

    /// A replacement parsing pattern is not a valid regular expression.
    #[error("the supplied pattern {pattern:?} is not a valid regular expression")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The underlying compilation failure.
        #[source]
        source: regex::Error,
    },

    /// A caller-supplied hook failed. The original error is carried as-is.
    #[error("{0}")]
    Hook(BoxError),
}

/// Details of a vetoed transition.
///
/// Carries what the engine knew at the moment a hook stopped the attempt:
/// the input, a description of the stateful object (its type name and
/// current state name), the per-attempt [`Context`], and the state that
/// would have resulted had the transition completed.
#[derive(Debug, Error)]
#[error("Failed attempting to {} a {} with current state {}", .input.name(), .object, .current_state)]
pub struct TransitionFailure {
    /// The input that triggered the attempt.
    pub input: Input,
    /// Type name of the stateful object.
    pub object: String,
    /// Name of the object's current state when the veto happened.
    pub current_state: String,
    /// The context shared by all hooks of the attempt.
    pub context: Context,
    /// The state the object would have reached.
    pub next_state: State,
}

impl TransitionFailure {
    /// Capture the failure details for `object` at the point of a veto.
    pub fn new<O: Stateful>(
        input: &Input,
        object: &O,
        context: &Context,
        next_state: &State,
    ) -> Self {
        let current_state = object
            .current_state_name()
            .map(str::to_owned)
            .unwrap_or_else(|_| String::from("(unset)"));

        Self {
            input: input.clone(),
            object: std::any::type_name::<O>().to_owned(),
            current_state,
            context: context.clone(),
            next_state: next_state.clone(),
        }
    }
}

impl From<TransitionFailure> for Error {
    fn from(failure: TransitionFailure) -> Self {
        Error::TransitionFailed(Box::new(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flyweight::Registry;
    use crate::stateful::StateSlot;

    #[test]
    fn unsupported_transition_message_names_input_and_state() {
        let registry = Registry::new();

        let error = Error::UnsupportedTransition {
            input: registry.input("CLOSE"),
            state: registry.state("CLOSED"),
        };

        assert_eq!(error.to_string(), "Cannot CLOSE a CLOSED object");
    }

    #[test]
    fn transition_failure_message_names_input_object_and_state() {
        let registry = Registry::new();

        let mut object = StateSlot::new();
        object.set_current_state(registry.state("WHITES_TURN"));

        let failure = TransitionFailure::new(
            &registry.input("WHITE_MOVES"),
            &object,
            &Context::new(),
            &registry.state("BLACKS_TURN"),
        );

        let message = failure.to_string();
        assert!(message.starts_with("Failed attempting to WHITE_MOVES a "));
        assert!(message.ends_with("with current state WHITES_TURN"));
    }

    #[test]
    fn transition_failure_reports_unset_state() {
        let registry = Registry::new();
        let object = StateSlot::new();

        let failure = TransitionFailure::new(
            &registry.input("OPEN"),
            &object,
            &Context::new(),
            &registry.state("OPENED"),
        );

        assert_eq!(failure.current_state, "(unset)");
    }

    #[test]
    fn hook_errors_preserve_their_message() {
        let error = Error::Hook("kaboom!".into());

        assert_eq!(error.to_string(), "kaboom!");
    }
}
