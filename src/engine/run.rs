//! The externally held execution pair.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Current control state plus the caller's runtime state.
///
/// The engine never stores a `Run`; callers hold it, pass it to
/// [`Engine::process`](crate::engine::Engine::process) and keep the one it
/// returns. Serializable whenever `S` and `R` are, so a run can be persisted
/// and resumed against the same engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run<S, R = ()> {
    /// Control state of the machine
    pub state: S,
    /// Value threaded through guards, hooks and actions
    pub runtime: R,
}

impl<S: State, R> Run<S, R> {
    /// Pair `state` with `runtime`.
    pub fn new(state: S, runtime: R) -> Self {
        Self { state, runtime }
    }

    /// Current control state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Current runtime value.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Split the pair into its state and runtime value.
    pub fn into_parts(self) -> (S, R) {
        (self.state, self.runtime)
    }

    /// Whether the control state is marked final.
    pub fn is_final(&self) -> bool {
        self.state.is_final()
    }
}

impl<S: State, R> From<(S, R)> for Run<S, R> {
    fn from((state, runtime): (S, R)) -> Self {
        Self::new(state, runtime)
    }
}
