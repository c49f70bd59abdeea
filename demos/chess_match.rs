//! Chess Match State Machine
//!
//! This demo drives a chess match through its turns with an audit hook
//! registered on the global wildcard pair, showing:
//! - building a table from the textual `CURRENT + INPUT = NEXT` syntax
//! - a cross-cutting `after` hook that observes every transition
//! - the unsupported-transition error for an invalid move
//!
//! Run with: cargo run --example chess_match

use gearshift::hook::{from_fn, Flow};
use gearshift::{
    Context, Error, Input, Machine, Registry, State, StateSlot, Stateful, TransitionPattern,
    TransitionTable, PRIORITY_NORMAL,
};

fn main() -> Result<(), Error> {
    println!("=== Chess Match State Machine ===\n");

    let registry = Registry::new();
    let pattern = TransitionPattern::default();

    let table: TransitionTable = [
        "WHITES_TURN + WHITE_MOVES = BLACKS_TURN",
        "BLACKS_TURN + BLACK_MOVES = WHITES_TURN",
        "WHITES_TURN + CHECKMATE = WHITE_WINS",
        "BLACKS_TURN + CHECKMATE = BLACK_WINS",
        "WHITES_TURN + STALEMATE = DRAW",
        "BLACKS_TURN + STALEMATE = DRAW",
    ]
    .iter()
    .map(|line| pattern.parse(&registry, line))
    .collect::<Result<_, _>>()?;

    let mut machine = Machine::<StateSlot>::new(&registry, table);

    // Audit every transition, whatever the input and state.
    machine.after(
        &registry.any_input(),
        &registry.any_state(),
        from_fn(
            |_: &str,
             object: &mut StateSlot,
             _: &mut Context,
             input: &Input,
             _: &State|
             -> Result<Flow, Error> {
                println!("  [audit] {} -> {}", input.name(), object.current_state_name()?);
                Ok(Flow::Continue)
            },
        ),
        PRIORITY_NORMAL,
    );

    let mut game = StateSlot::new();
    game.set_current_state(registry.state("WHITES_TURN"));
    println!("Game starts in {}\n", game.current_state_name()?);

    println!("Playing out a short game:");
    for input in ["WHITE_MOVES", "BLACK_MOVES", "CHECKMATE"] {
        machine.trigger(&registry.input(input), &mut game)?;
    }
    println!("\nFinal state: {}\n", game.current_state_name()?);

    println!("An invalid move is rejected before any hook fires:");
    let error = machine
        .trigger(&registry.input("CASTLE TWICE"), &mut game)
        .unwrap_err();
    println!("  {error}");

    println!("\n=== Demo Complete ===");
    Ok(())
}
