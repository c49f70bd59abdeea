//! Gearshift: an eventful finite-state-machine engine.
//!
//! A [`Machine`] moves an arbitrary stateful object between named states in
//! response to named inputs, resolved through an immutable
//! [`TransitionTable`]. Observers hook into three points of every attempted
//! transition — `before`, `on`, and `after` — at four levels of specificity
//! per phase (exact input and state, any input, any state, or fully global),
//! and any hook can veto the attempt in progress.
//!
//! # Core concepts
//!
//! - **Identity, not equality**: [`State`]s and [`Input`]s are flyweights
//!   minted by a [`Registry`]; the same name always yields the same instance.
//! - **Wildcards**: each category has an [`any_state`](Registry::any_state) /
//!   [`any_input`](Registry::any_input) sentinel for cross-cutting hooks.
//! - **The commit is a hook**: the built-in [`ChangesState`] hook on the
//!   global `on` channel is what actually writes the new state, so even the
//!   commit can be replaced.
//!
//! # Example
//!
//! ```rust
//! use gearshift::hook::{from_fn, Flow};
//! use gearshift::{
//!     Context, Error, Input, Machine, Registry, State, StateSlot, Stateful,
//!     TransitionPattern, TransitionTable, PRIORITY_NORMAL,
//! };
//!
//! let registry = Registry::new();
//! let pattern = TransitionPattern::default();
//!
//! let table: TransitionTable = [
//!     "WHITES_TURN + WHITE_MOVES = BLACKS_TURN",
//!     "BLACKS_TURN + BLACK_MOVES = WHITES_TURN",
//!     "WHITES_TURN + CHECKMATE = WHITE_WINS",
//! ]
//! .iter()
//! .map(|line| pattern.parse(&registry, line))
//! .collect::<Result<_, _>>()?;
//!
//! let mut machine = Machine::<StateSlot>::new(&registry, table);
//!
//! // Audit every transition, whatever the input and state.
//! machine.after(
//!     &registry.any_input(),
//!     &registry.any_state(),
//!     from_fn(
//!         |_: &str,
//!          _object: &mut StateSlot,
//!          context: &mut Context,
//!          input: &Input,
//!          _: &State|
//!          -> Result<Flow, Error> {
//!             context.insert("last_move", input.name());
//!             Ok(Flow::Continue)
//!         },
//!     ),
//!     PRIORITY_NORMAL,
//! );
//!
//! let mut game = StateSlot::new();
//! game.set_current_state(registry.state("WHITES_TURN"));
//!
//! machine.trigger(&registry.input("WHITE_MOVES"), &mut game)?;
//! assert_eq!(game.current_state_name()?, "BLACKS_TURN");
//! # Ok::<(), gearshift::Error>(())
//! ```

pub mod context;
pub mod error;
pub mod flyweight;
pub mod hook;
pub mod machine;
pub mod stateful;
pub mod transition;

pub use context::Context;
pub use error::{BoxError, Error, TransitionFailure};
pub use flyweight::{Input, Registry, State};
pub use hook::{ChangesState, Flow, Hook, ReportsFailures};
pub use machine::{Machine, MachineBuilder, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_NORMAL};
pub use stateful::{StateSlot, Stateful};
pub use transition::{Transition, TransitionPattern, TransitionTable, DEFAULT_PATTERN};
