//! Turnstile State Machine
//!
//! The classic coin-operated turnstile, showing:
//! - a `before` hook that vetoes a transition (a bent coin is rejected)
//! - the structured failure surfaced to the caller
//! - the per-attempt context as a channel between caller and hooks
//!
//! Run with: cargo run --example turnstile

use gearshift::hook::{from_fn, Flow};
use gearshift::{
    impl_stateful, Context, Error, Input, Machine, Registry, State, StateSlot, Stateful,
    TransitionPattern, TransitionTable, PRIORITY_NORMAL,
};

struct Turnstile {
    coins_accepted: u32,
    state: StateSlot,
}

impl_stateful!(Turnstile { state });

fn main() -> Result<(), Error> {
    println!("=== Turnstile State Machine ===\n");

    let registry = Registry::new();
    let pattern = TransitionPattern::default();

    let table: TransitionTable = [
        "LOCKED + COIN = UNLOCKED",
        "UNLOCKED + PUSH = LOCKED",
        "LOCKED + PUSH = LOCKED",
    ]
    .iter()
    .map(|line| pattern.parse(&registry, line))
    .collect::<Result<_, _>>()?;

    let mut machine = Machine::<Turnstile>::new(&registry, table);

    // Inspect every coin before accepting it.
    machine.before(
        &registry.input("COIN"),
        &registry.state("LOCKED"),
        from_fn(
            |_: &str,
             _: &mut Turnstile,
             context: &mut Context,
             _: &Input,
             _: &State|
             -> Result<Flow, Error> {
                if context.get("bent").and_then(|v| v.as_bool()).unwrap_or(false) {
                    println!("  [inspector] bent coin, rejecting");
                    return Ok(Flow::Veto);
                }
                Ok(Flow::Continue)
            },
        ),
        PRIORITY_NORMAL,
    );

    // Count coins once the transition has committed.
    machine.after(
        &registry.input("COIN"),
        &registry.state("LOCKED"),
        from_fn(
            |_: &str,
             turnstile: &mut Turnstile,
             _: &mut Context,
             _: &Input,
             _: &State|
             -> Result<Flow, Error> {
                turnstile.coins_accepted += 1;
                Ok(Flow::Continue)
            },
        ),
        PRIORITY_NORMAL,
    );

    let mut turnstile = Turnstile {
        coins_accepted: 0,
        state: StateSlot::new(),
    };
    turnstile.set_current_state(registry.state("LOCKED"));

    println!("Inserting a good coin:");
    machine.trigger(&registry.input("COIN"), &mut turnstile)?;
    println!("  state: {}\n", turnstile.current_state_name()?);

    println!("Pushing through:");
    machine.trigger(&registry.input("PUSH"), &mut turnstile)?;
    println!("  state: {}\n", turnstile.current_state_name()?);

    println!("Inserting a bent coin:");
    let mut context = Context::new();
    context.insert("bent", true);
    let error = machine
        .trigger_with(&registry.input("COIN"), &mut turnstile, &mut context)
        .unwrap_err();
    println!("  {error}");
    println!("  state: {}", turnstile.current_state_name()?);
    println!("  coins accepted: {}", turnstile.coins_accepted);

    println!("\n=== Demo Complete ===");
    Ok(())
}
