//! The two hooks every machine starts with.

use super::{Flow, Hook};
use crate::context::Context;
use crate::error::{Error, TransitionFailure};
use crate::flyweight::{Input, State};
use crate::stateful::Stateful;

/// The default state-changer hook.
///
/// Registered on the global `on` channel at machine construction unless the
/// caller supplies a replacement. Committing the resolved state is just
/// another hook, which is what makes the commit itself interceptable.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChangesState;

impl<O: Stateful> Hook<O> for ChangesState {
    fn call(
        &self,
        _channel: &str,
        object: &mut O,
        _context: &mut Context,
        _input: &Input,
        next_state: &State,
    ) -> Result<Flow, Error> {
        object.set_current_state(next_state.clone());
        Ok(Flow::Continue)
    }
}

/// The default `failed`-channel hook.
///
/// Raises the structured [`TransitionFailure`] describing the vetoed
/// attempt. Replace it at construction time to report failures differently;
/// the engine still surfaces a `TransitionFailed` error to the `trigger`
/// caller either way.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportsFailures;

impl<O: Stateful> Hook<O> for ReportsFailures {
    fn call(
        &self,
        _channel: &str,
        object: &mut O,
        context: &mut Context,
        input: &Input,
        next_state: &State,
    ) -> Result<Flow, Error> {
        Err(TransitionFailure::new(input, object, context, next_state).into())
    }
}
