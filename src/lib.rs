//! Switchyard: a transition-table finite state machine engine
//!
//! Declare states, the events each state reacts to, optional guards, the
//! state each event leads to, per-transition actions and per-state entry/exit
//! hooks with a fluent builder, then drive the machine by feeding it events.
//!
//! # Core Concepts
//!
//! - **State**: any equality/hash key implementing the `State` trait
//! - **Event matchers**: accept events by value, by enum variant or by predicate
//! - **Guards**: predicates over the runtime state and event
//! - **Runtime state**: a caller-owned value threaded through guards, exit
//!   hook, action and entry hook; use `()` for machines without one
//! - **Engine**: immutable once built; every run is a `(state, runtime)` pair
//!   held by the caller
//!
//! The engine is synchronous and single-threaded per run. It logs dispatch
//! decisions through `tracing` at trace level and never installs a subscriber.
//!
//! # Example
//!
//! ```rust
//! use switchyard::{EngineBuilder, EventMatcher};
//! use switchyard::state_enum;
//!
//! state_enum! {
//!     enum Coin {
//!         Initial,
//!         Count,
//!         Final,
//!     }
//!     final: [Final]
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Toss {
//!     Heads(u64),
//!     Tails(u64),
//!     Miracle(u64),
//! }
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Tally {
//!     heads: u32,
//!     tails: u32,
//! }
//!
//! let engine = EngineBuilder::<Coin, Toss, Tally>::new()
//!     .initial_state(Coin::Initial)
//!     .on_state(Coin::Initial, |s| {
//!         s.on_event(EventMatcher::variant(&Toss::Miracle(0)))
//!             .change_to(Coin::Count)
//!             .no_action()
//!     })
//!     .on_state(Coin::Count, |s| {
//!         s.on_event(EventMatcher::variant(&Toss::Heads(0)))
//!             .action(|t, _| Tally { heads: t.heads + 1, ..t })
//!             .on_event(EventMatcher::variant(&Toss::Tails(0)))
//!             .action(|t, _| Tally { tails: t.tails + 1, ..t })
//!             .on_event(EventMatcher::variant(&Toss::Miracle(0)))
//!             .change_to(Coin::Final)
//!             .no_action()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let run = engine.process(
//!     engine.start(Tally::default()),
//!     [Toss::Miracle(1), Toss::Heads(2), Toss::Tails(3), Toss::Miracle(4)],
//! );
//!
//! assert!(run.is_final());
//! assert_eq!(run.runtime, Tally { heads: 1, tails: 1 });
//! ```

pub mod builder;
pub mod core;
pub mod diagram;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, EngineBuilder};
pub use crate::core::{EventMatcher, Guard, State};
pub use crate::engine::{Engine, Run, Transition};
