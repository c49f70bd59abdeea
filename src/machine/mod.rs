//! The transition event engine.
//!
//! A [`Machine`] orchestrates one state-transition attempt end to end: it
//! resolves the next state through its [`TransitionTable`], expands the
//! wildcard hook-channel combinations for the attempted (input, state) pair,
//! publishes to each non-empty channel in a fixed order, and either lets the
//! `on`-channel hooks commit the new state or aborts with a structured
//! failure when a hook vetoes.

mod emitter;

use tracing::{debug, trace};

use crate::context::Context;
use crate::error::{Error, TransitionFailure};
use crate::flyweight::{Input, Registry, State};
use crate::hook::{ChangesState, Flow, Hook, ReportsFailures};
use crate::stateful::Stateful;
use crate::transition::TransitionTable;

use emitter::Emitter;

/// Hooks with this priority run before normal-priority hooks on a channel.
pub const PRIORITY_HIGH: i32 = 100;
/// The default hook priority.
pub const PRIORITY_NORMAL: i32 = 0;
/// Hooks with this priority run after normal-priority hooks on a channel.
pub const PRIORITY_LOW: i32 = -100;

/// The channel published once when a hook vetoes a transition.
const FAILED_CHANNEL: &str = "failed";

fn channel_name(phase: &str, input: &Input, state: &State) -> String {
    format!("{} {} {}", phase, input.name(), state.name())
}

/// The eventful state machine.
///
/// Built from a required [`TransitionTable`] plus two replaceable built-in
/// hooks: a state changer on the global `on` channel (default:
/// [`ChangesState`]) and a failure reporter on the `failed` channel
/// (default: [`ReportsFailures`]). Hook registration and triggering are
/// synchronous; `trigger` runs to completion on the caller's thread.
///
/// # Example
///
/// ```rust
/// use gearshift::{Machine, Registry, StateSlot, Stateful, TransitionPattern, TransitionTable};
///
/// let registry = Registry::new();
/// let pattern = TransitionPattern::default();
///
/// let table: TransitionTable = ["CLOSED + OPEN = OPENED", "OPENED + CLOSE = CLOSED"]
///     .iter()
///     .map(|line| pattern.parse(&registry, line))
///     .collect::<Result<_, _>>()?;
///
/// let machine = Machine::<StateSlot>::new(&registry, table);
///
/// let mut door = StateSlot::new();
/// door.set_current_state(registry.state("CLOSED"));
///
/// machine.trigger(&registry.input("OPEN"), &mut door)?;
/// assert_eq!(door.current_state_name()?, "OPENED");
/// # Ok::<(), gearshift::Error>(())
/// ```
pub struct Machine<O: Stateful> {
    table: TransitionTable,
    emitter: Emitter<O>,
    any_input: Input,
    any_state: State,
}

impl<O: Stateful> Machine<O> {
    /// Create a machine with the default state-changer and failure hooks.
    ///
    /// The registry supplies the wildcard sentinels the machine uses for
    /// channel naming; pass the same registry your states and inputs come
    /// from.
    pub fn new(registry: &Registry, table: TransitionTable) -> Self {
        Self::builder(registry, table).build()
    }

    /// Start building a machine with custom built-in hooks.
    pub fn builder(registry: &Registry, table: TransitionTable) -> MachineBuilder<O> {
        MachineBuilder::new(registry, table)
    }

    /// Register `hook` for the `before` phase of transitions matching
    /// `(input, state)`. Either side may be a wildcard from the registry.
    ///
    /// `before` hooks run ahead of the state commit and are the natural
    /// place to veto an otherwise valid transition.
    pub fn before(&mut self, input: &Input, state: &State, hook: impl Hook<O> + 'static, priority: i32) {
        self.subscribe("before", input, state, hook, priority);
    }

    /// Register `hook` for the `on` phase of transitions matching
    /// `(input, state)`.
    ///
    /// The engine's default channel set only ever publishes the global
    /// `on (any, any)` channel — the one the built-in state changer sits on —
    /// so an `on` hook scoped to a specific pair fires only if you arrange
    /// for its channel to be published yourself. Prefer `before`/`after` for
    /// pair-specific logic.
    pub fn on(&mut self, input: &Input, state: &State, hook: impl Hook<O> + 'static, priority: i32) {
        self.subscribe("on", input, state, hook, priority);
    }

    /// Register `hook` for the `after` phase of transitions matching
    /// `(input, state)`. Runs once the state commit has happened — the place
    /// for persistence, notifications, and logging.
    pub fn after(&mut self, input: &Input, state: &State, hook: impl Hook<O> + 'static, priority: i32) {
        self.subscribe("after", input, state, hook, priority);
    }

    /// Trigger `input` on `object` with a fresh, empty context.
    pub fn trigger(&self, input: &Input, object: &mut O) -> Result<(), Error> {
        let mut context = Context::new();
        self.trigger_with(input, object, &mut context)
    }

    /// Trigger `input` on `object`, threading the caller's `context` through
    /// every hook of this one attempt.
    ///
    /// Resolves the next state first: an unsupported (state, input) pair
    /// fails before any channel fires. Then publishes the wildcard-expanded
    /// channel sequence — four `before` combinations, the global `on`, four
    /// `after` combinations — skipping channels nobody subscribed to. A veto
    /// on any channel publishes once to `failed` and surfaces
    /// [`Error::TransitionFailed`]; other hook errors propagate unmodified.
    pub fn trigger_with(
        &self,
        input: &Input,
        object: &mut O,
        context: &mut Context,
    ) -> Result<(), Error> {
        let current = object.current_state()?.clone();
        let next = self.table.resolve(&current, input)?;

        debug!(
            input = input.name(),
            from = current.name(),
            to = next.name(),
            "resolved transition"
        );

        for channel in self.channels_for(input, &current) {
            if !self.emitter.has_subscribers(&channel) {
                continue;
            }

            trace!(channel = channel.as_str(), "publishing transition event");

            if self.emitter.publish(&channel, object, context, input, &next)? == Flow::Veto {
                debug!(channel = channel.as_str(), "transition vetoed");
                self.emitter
                    .publish(FAILED_CHANNEL, object, context, input, &next)?;

                return Err(TransitionFailure::new(input, object, context, &next).into());
            }
        }

        Ok(())
    }

    fn subscribe(
        &mut self,
        phase: &str,
        input: &Input,
        state: &State,
        hook: impl Hook<O> + 'static,
        priority: i32,
    ) {
        self.emitter
            .subscribe(channel_name(phase, input, state), Box::new(hook), priority);
    }

    /// The ordered channel names to consider for one attempt.
    ///
    /// The order is the contract: exact pair first, then any-input, then
    /// any-state, then fully global, for `before`; the single global `on`;
    /// the same four-step expansion for `after`. Duplicate names (possible
    /// when triggering with a wildcard itself) are kept once, at their first
    /// position.
    fn channels_for(&self, input: &Input, current: &State) -> Vec<String> {
        let any_input = &self.any_input;
        let any_state = &self.any_state;

        let combinations: [(&str, &Input, &State); 9] = [
            ("before", input, current),
            ("before", any_input, current),
            ("before", input, any_state),
            ("before", any_input, any_state),
            ("on", any_input, any_state),
            ("after", input, current),
            ("after", any_input, current),
            ("after", input, any_state),
            ("after", any_input, any_state),
        ];

        let mut channels = Vec::with_capacity(combinations.len());
        for (phase, i, s) in combinations {
            let name = channel_name(phase, i, s);
            if !channels.contains(&name) {
                channels.push(name);
            }
        }

        channels
    }
}

/// Builder for a [`Machine`] with custom built-in hooks.
///
/// # Example
///
/// ```rust
/// use gearshift::hook::{from_fn, Flow};
/// use gearshift::{Context, Error, Input, Machine, Registry, State, StateSlot, Stateful};
/// use gearshift::{TransitionPattern, TransitionTable};
///
/// let registry = Registry::new();
/// let pattern = TransitionPattern::default();
/// let table: TransitionTable = ["CLOSED + OPEN = OPENED"]
///     .iter()
///     .map(|line| pattern.parse(&registry, line))
///     .collect::<Result<_, _>>()?;
///
/// // Redirect the commit instead of letting the default hook run.
/// let machine = Machine::<StateSlot>::builder(&registry, table)
///     .state_changer(from_fn(
///         |_: &str,
///          object: &mut StateSlot,
///          _: &mut Context,
///          _: &Input,
///          next: &State|
///          -> Result<Flow, Error> {
///             object.set_current_state(next.clone());
///             Ok(Flow::Continue)
///         },
///     ))
///     .build();
/// # let _ = machine;
/// # Ok::<(), gearshift::Error>(())
/// ```
pub struct MachineBuilder<O: Stateful> {
    table: TransitionTable,
    any_input: Input,
    any_state: State,
    state_changer: Option<Box<dyn Hook<O>>>,
    failure_handler: Option<Box<dyn Hook<O>>>,
}

impl<O: Stateful> MachineBuilder<O> {
    /// Start a builder for a machine over `table`.
    pub fn new(registry: &Registry, table: TransitionTable) -> Self {
        Self {
            table,
            any_input: registry.any_input(),
            any_state: registry.any_state(),
            state_changer: None,
            failure_handler: None,
        }
    }

    /// Replace the hook that commits the resolved state (default:
    /// [`ChangesState`]). The replacement is registered on the global `on`
    /// channel in its place.
    pub fn state_changer(mut self, hook: impl Hook<O> + 'static) -> Self {
        self.state_changer = Some(Box::new(hook));
        self
    }

    /// Replace the hook on the `failed` channel (default:
    /// [`ReportsFailures`]).
    pub fn failure_handler(mut self, hook: impl Hook<O> + 'static) -> Self {
        self.failure_handler = Some(Box::new(hook));
        self
    }

    /// Finish the machine, installing defaults for any hook not replaced.
    pub fn build(self) -> Machine<O> {
        let mut emitter = Emitter::new();

        emitter.subscribe(
            channel_name("on", &self.any_input, &self.any_state),
            self.state_changer
                .unwrap_or_else(|| Box::new(ChangesState)),
            PRIORITY_NORMAL,
        );
        emitter.subscribe(
            FAILED_CHANNEL,
            self.failure_handler
                .unwrap_or_else(|| Box::new(ReportsFailures)),
            PRIORITY_NORMAL,
        );

        Machine {
            table: self.table,
            emitter,
            any_input: self.any_input,
            any_state: self.any_state,
        }
    }
}
