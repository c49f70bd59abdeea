//! Hook capability and the engine's built-in hooks.
//!
//! Hooks observe transition attempts on `before` / `on` / `after` channels
//! and may veto the attempt. A veto is an ordinary return value, not an
//! error: each invocation resolves to continue, veto, or a propagated hook
//! failure, and the three outcomes are distinct at the type level.

mod builtin;

pub use builtin::{ChangesState, ReportsFailures};

use crate::context::Context;
use crate::error::Error;
use crate::flyweight::{Input, State};
use crate::stateful::Stateful;

/// A hook's verdict on the transition in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Let the attempt proceed to the remaining hooks and channels.
    Continue,
    /// Abort the attempt; the engine fires the `failed` channel and reports
    /// a transition failure.
    Veto,
}

/// An observer of transition attempts on a stateful object of type `O`.
///
/// Every hook sees the same fixed payload: the channel that fired, the object
/// being transitioned, the per-attempt [`Context`], the triggering
/// [`Input`], and the [`State`] the object is headed for. Returning
/// `Ok(Flow::Veto)` aborts the attempt; returning `Err` propagates to the
/// `trigger` caller unmodified — the engine performs no rollback on behalf of
/// a failing hook.
///
/// Closures become hooks via [`from_fn`].
pub trait Hook<O: Stateful>: Send + Sync {
    /// Observe one channel publication for one transition attempt.
    fn call(
        &self,
        channel: &str,
        object: &mut O,
        context: &mut Context,
        input: &Input,
        next_state: &State,
    ) -> Result<Flow, Error>;
}

/// A [`Hook`] backed by a closure. Created with [`from_fn`].
pub struct FnHook<F> {
    f: F,
}

/// Wrap a closure as a [`Hook`].
///
/// # Example
///
/// ```rust
/// use gearshift::hook::{from_fn, Flow};
/// use gearshift::{Context, Error, Input, State, StateSlot};
///
/// let audit = from_fn(
///     |channel: &str,
///      _object: &mut StateSlot,
///      context: &mut Context,
///      _input: &Input,
///      _next: &State|
///      -> Result<Flow, Error> {
///         context.insert("last_channel", channel);
///         Ok(Flow::Continue)
///     },
/// );
/// ```
pub fn from_fn<F>(f: F) -> FnHook<F> {
    FnHook { f }
}

impl<O, F> Hook<O> for FnHook<F>
where
    O: Stateful,
    F: Fn(&str, &mut O, &mut Context, &Input, &State) -> Result<Flow, Error> + Send + Sync,
{
    fn call(
        &self,
        channel: &str,
        object: &mut O,
        context: &mut Context,
        input: &Input,
        next_state: &State,
    ) -> Result<Flow, Error> {
        (self.f)(channel, object, context, input, next_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flyweight::Registry;
    use crate::stateful::StateSlot;

    #[test]
    fn closure_hooks_receive_the_full_payload() {
        let registry = Registry::new();
        let hook = from_fn(
            |channel: &str,
             _object: &mut StateSlot,
             context: &mut Context,
             input: &Input,
             next_state: &State|
             -> Result<Flow, Error> {
                context.insert("channel", channel);
                context.insert("input", input.name());
                context.insert("next", next_state.name());
                Ok(Flow::Continue)
            },
        );

        let mut object = StateSlot::new();
        let mut context = Context::new();

        let flow = hook
            .call(
                "before OPEN CLOSED",
                &mut object,
                &mut context,
                &registry.input("OPEN"),
                &registry.state("OPENED"),
            )
            .unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(context.get("channel"), Some(&"before OPEN CLOSED".into()));
        assert_eq!(context.get("input"), Some(&"OPEN".into()));
        assert_eq!(context.get("next"), Some(&"OPENED".into()));
    }

    #[test]
    fn closure_hooks_can_veto() {
        let registry = Registry::new();
        let hook = from_fn(
            |_: &str,
             _: &mut StateSlot,
             _: &mut Context,
             _: &Input,
             _: &State|
             -> Result<Flow, Error> { Ok(Flow::Veto) },
        );

        let flow = hook
            .call(
                "before OPEN CLOSED",
                &mut StateSlot::new(),
                &mut Context::new(),
                &registry.input("OPEN"),
                &registry.state("OPENED"),
            )
            .unwrap();

        assert_eq!(flow, Flow::Veto);
    }
}
