//! Transition records and state hook tables.

use crate::core::{EventMatcher, Guard, State};
use std::collections::HashMap;
use std::fmt::{self, Debug};

/// Action run when a transition fires. Receives the runtime state left by the
/// exit hook plus the event, and returns the next runtime state.
pub type TransitionAction<R, E> = Box<dyn Fn(R, &E) -> R + Send + Sync>;

/// Entry or exit hook attached to a state.
pub(crate) type StateHook<R> = Box<dyn Fn(R) -> R + Send + Sync>;

/// Action that hands the runtime state back untouched.
pub(crate) fn identity<R>(runtime: R) -> R {
    runtime
}

/// One edge of the transition table.
///
/// Transitions are immutable once built; the engine only reads them.
pub struct Transition<S: State, E, R> {
    from: S,
    matcher: EventMatcher<E>,
    guard: Option<Guard<R, E>>,
    to: S,
    action: TransitionAction<R, E>,
}

impl<S: State, E, R> Transition<S, E, R> {
    pub(crate) fn new(
        from: S,
        matcher: EventMatcher<E>,
        guard: Option<Guard<R, E>>,
        to: S,
        action: TransitionAction<R, E>,
    ) -> Self {
        Self {
            from,
            matcher,
            guard,
            to,
            action,
        }
    }

    /// Source state.
    pub fn from(&self) -> &S {
        &self.from
    }

    /// Destination state.
    pub fn to(&self) -> &S {
        &self.to
    }

    /// Matcher deciding which events this transition accepts.
    pub fn matcher(&self) -> &EventMatcher<E> {
        &self.matcher
    }

    /// Whether a guard was declared for this transition.
    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Whether the source state leads back into itself.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }

    pub(crate) fn apply(&self, runtime: R, event: &E) -> R {
        (self.action)(runtime, event)
    }

    /// Check if this transition fires for `event` while the machine sits in
    /// `current` holding `runtime`. Guards run last.
    pub fn can_fire(&self, current: &S, runtime: &R, event: &E) -> bool {
        if *current != self.from || !self.matcher.matches(event) {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(runtime, event))
    }

    /// Event label for introspection and diagrams.
    pub fn label(&self) -> String {
        self.matcher.label().to_string()
    }
}

impl<S: State, E, R> Debug for Transition<S, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("matcher", &self.matcher)
            .field("guarded", &self.guard.is_some())
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

/// Per-state entry or exit hooks, at most one per state.
pub(crate) struct HookTable<S: State, R> {
    hooks: HashMap<S, StateHook<R>>,
}

impl<S: State, R> HookTable<S, R> {
    pub(crate) fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Register the hook for `state`, replacing any previous one.
    pub(crate) fn set(&mut self, state: S, hook: StateHook<R>) {
        self.hooks.insert(state, hook);
    }

    /// Run the hook for `state`, or hand `runtime` back if none is registered.
    pub(crate) fn apply(&self, state: &S, runtime: R) -> R {
        match self.hooks.get(state) {
            Some(hook) => hook(runtime),
            None => identity(runtime),
        }
    }

    /// Whether `state` has a hook.
    pub(crate) fn contains(&self, state: &S) -> bool {
        self.hooks.contains_key(state)
    }

    /// Number of registered hooks.
    pub(crate) fn len(&self) -> usize {
        self.hooks.len()
    }
}

impl<S: State, R> Debug for HookTable<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.hooks.keys()).finish()
    }
}
