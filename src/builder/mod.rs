//! Builder API for ergonomic engine construction.
//!
//! [`EngineBuilder`] collects the initial state plus per-state declarations
//! made through [`StateBuilder`] and [`EventBuilder`], and freezes them into
//! an immutable [`Engine`](crate::engine::Engine).

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::EngineBuilder;
pub use state::{EventBuilder, StateBuilder};
