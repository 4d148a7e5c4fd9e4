//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic machine without runtime state.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Events matched by value
//! - Stateless engines driven with `advance`
//! - PlantUML export of the transition table
//!
//! Run with: cargo run --example traffic_light

use switchyard::diagram::{self, DiagramOptions};
use switchyard::state_enum;
use switchyard::EngineBuilder;

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

#[derive(Debug, PartialEq)]
enum Timer {
    TimerExpired,
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let engine = EngineBuilder::<TrafficLight, Timer>::new()
        .initial_state(TrafficLight::Red)
        .on_state(TrafficLight::Red, |s| {
            s.on_entry_consumer(|_| println!("  -> Stop"))
                .on_event(Timer::TimerExpired)
                .change_to(TrafficLight::Green)
                .no_action()
        })
        .on_state(TrafficLight::Green, |s| {
            s.on_entry_consumer(|_| println!("  -> Go!"))
                .on_event(Timer::TimerExpired)
                .change_to(TrafficLight::Yellow)
                .no_action()
        })
        .on_state(TrafficLight::Yellow, |s| {
            s.on_entry_consumer(|_| println!("  -> Caution"))
                .on_event(Timer::TimerExpired)
                .change_to(TrafficLight::Red)
                .no_action()
        })
        .build()
        .unwrap();

    println!("Initial state: {:?}\n", engine.initial_state());

    println!("Four timer ticks:");
    let state = engine.advance(
        *engine.initial_state(),
        std::iter::repeat_with(|| Timer::TimerExpired).take(4),
    );
    println!("\nState after four ticks: {state:?}\n");

    println!("PlantUML description:");
    print!("{}", diagram::render(&engine, &DiagramOptions::default()));

    println!("\n=== Example Complete ===");
}
