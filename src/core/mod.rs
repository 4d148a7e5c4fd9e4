//! Core value types shared by the builder and the engine.
//!
//! - States via the `State` trait
//! - Event matchers that decide which events a transition accepts
//! - Guard predicates over the runtime state and the event

mod guard;
mod matcher;
mod state;

pub use guard::Guard;
pub use matcher::EventMatcher;
pub use state::State;
