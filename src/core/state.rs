//! Core State trait for state machine states.
//!
//! States are plain values used as equality and map keys. They are declared
//! once when the engine is built and referenced by value afterwards.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the running pair owns its current state
/// - `Eq` + `Hash`: states key the entry/exit hook tables
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// assert!(!DoorState::Locked.is_final());
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display and diagram output.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational: the engine still dispatches events declared
    /// on a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
