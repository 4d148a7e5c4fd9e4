//! Coin Counting Machine
//!
//! This example threads an immutable tally through hooks and actions.
//!
//! Key concepts:
//! - Matching events by enum variant
//! - Entry and exit hooks that update runtime state
//! - Self-transitions re-running entry/exit hooks
//! - Trace-level dispatch logging through `tracing`
//!
//! Run with: cargo run --example coin_count

use switchyard::state_enum;
use switchyard::{EngineBuilder, EventMatcher};

state_enum! {
    enum Coin {
        Initial,
        Count,
        Final,
    }
    final: [Final]
}

#[derive(Debug, PartialEq)]
enum Toss {
    Heads(u64),
    Tails(u64),
    Miracle(u64),
}

#[derive(Debug, Default)]
struct Tally {
    heads: u32,
    tails: u32,
    arrivals: u32,
    spin_total: u64,
}

fn spin(toss: &Toss) -> u64 {
    match toss {
        Toss::Heads(d) | Toss::Tails(d) | Toss::Miracle(d) => *d,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Coin Counting Machine ===\n");

    let engine = EngineBuilder::<Coin, Toss, Tally>::new()
        .initial_state(Coin::Initial)
        .on_state(Coin::Initial, |s| {
            s.on_event(EventMatcher::variant(&Toss::Miracle(0)))
                .change_to(Coin::Count)
                .no_action()
        })
        .on_state(Coin::Count, |s| {
            s.on_entry_action(|t| Tally {
                arrivals: t.arrivals + 1,
                ..t
            })
            .on_event(EventMatcher::variant(&Toss::Heads(0)))
            .action(|t, toss| Tally {
                heads: t.heads + 1,
                spin_total: t.spin_total + spin(toss),
                ..t
            })
            .on_event(EventMatcher::variant(&Toss::Tails(0)))
            .action(|t, toss| Tally {
                tails: t.tails + 1,
                spin_total: t.spin_total + spin(toss),
                ..t
            })
            .on_event(EventMatcher::variant(&Toss::Miracle(0)))
            .change_to(Coin::Final)
            .no_action()
        })
        .build()
        .unwrap();

    let run = engine.process(
        engine.start(Tally::default()),
        [
            Toss::Miracle(5),
            Toss::Heads(6),
            Toss::Heads(7),
            Toss::Tails(8),
            Toss::Miracle(9),
        ],
    );

    println!("\nFinal state: {:?} (final: {})", run.state, run.is_final());
    println!("Tally: {:?}", run.runtime);

    println!("\n=== Example Complete ===");
}
