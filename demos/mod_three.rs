//! Remainder-mod-3 classifier
//!
//! Feeds each binary string given on the command line through a 3-state
//! machine and prints the remainder of the number modulo 3.
//!
//! Key concepts:
//! - Transition table loaded from JSON via `MachineConfig`
//! - Post-transition action counting consumed bits
//! - Reusing one machine with `reset`
//!
//! Run with: cargo run --example mod_three -- 1101 111111
//! Set `RUST_LOG=table_fsm=debug` to see every committed transition.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use table_fsm::{state_enum, Action, MachineConfig, StateMachine, TransitionRule};

state_enum! {
    enum Remainder {
        S0,
        S1,
        S2,
    }
}

const TABLE: &str = r#"{
    "initial": "S0",
    "rules": [
        { "from": "S0", "event": "0", "to": "S0" },
        { "from": "S0", "event": "1", "to": "S1" },
        { "from": "S1", "event": "0", "to": "S2" },
        { "from": "S1", "event": "1", "to": "S0" },
        { "from": "S2", "event": "0", "to": "S1" },
        { "from": "S2", "event": "1", "to": "S2" }
    ]
}"#;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "table_fsm=info".to_string()))
        .init();
}

fn build_machine(
    bits: &Arc<AtomicUsize>,
) -> Result<StateMachine<Remainder, char>, Box<dyn std::error::Error>> {
    let config: MachineConfig<Remainder, char> = MachineConfig::from_json(TABLE)?;

    // Attach the counter to every row; hooks are code, not config.
    let rules = config
        .rules
        .into_iter()
        .map(|row| {
            let bits = Arc::clone(bits);
            TransitionRule {
                action: Some(Action::new(move || {
                    bits.fetch_add(1, Ordering::Relaxed);
                })),
                ..TransitionRule::from(row)
            }
        })
        .collect();

    Ok(StateMachine::new(config.initial, rules))
}

fn remainder(state: Remainder) -> u8 {
    match state {
        Remainder::S0 => 0,
        Remainder::S1 => 1,
        Remainder::S2 => 2,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let bits = Arc::new(AtomicUsize::new(0));
    let machine = build_machine(&bits)?;

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec!["1101".to_string(), "1110".to_string(), "111111".to_string()]
    } else {
        inputs
    };

    println!("=== Mod-Three Classifier ===\n");

    for input in &inputs {
        machine.reset();
        bits.store(0, Ordering::Relaxed);

        match input.chars().try_for_each(|bit| machine.step(&bit)) {
            Ok(()) => println!(
                "{input:>12} -> {} ({} bits)",
                remainder(machine.current_state()),
                bits.load(Ordering::Relaxed)
            ),
            Err(err) => println!("{input:>12} -> rejected: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
