//! Transition-table engine.
//!
//! # Key Concepts
//!
//! - **Transitions**: source state, event matcher, optional guard,
//!   destination state and action, searched in declaration order
//! - **Hooks**: at most one entry and one exit hook per state
//! - **Runs**: the `(state, runtime)` pair the caller holds between calls
//!
//! The engine itself is immutable after it is built. Processing an event is
//! a pure fold over the caller's [`Run`]: exit hook, action, entry hook, in
//! that order, with no rollback if any of them panics.

mod machine;
mod run;
mod transition;

pub use machine::Engine;
pub use run::Run;
pub use transition::{Transition, TransitionAction};
pub(crate) use transition::{identity, HookTable, StateHook};
