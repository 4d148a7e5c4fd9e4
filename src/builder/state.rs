//! State-scoped and event-scoped builders used inside `EngineBuilder::on_state`.

use crate::core::{EventMatcher, Guard, State};
use crate::engine::{identity, StateHook, Transition, TransitionAction};

/// Declarations for a single state.
///
/// Obtained from [`EngineBuilder::on_state`](crate::builder::EngineBuilder::on_state)
/// and handed back to it when the configurator returns.
pub struct StateBuilder<S: State + 'static, E: 'static, R: 'static> {
    state: S,
    transitions: Vec<Transition<S, E, R>>,
    on_entry: Option<StateHook<R>>,
    on_exit: Option<StateHook<R>>,
}

type Declared<S, E, R> = (
    S,
    Vec<Transition<S, E, R>>,
    Option<StateHook<R>>,
    Option<StateHook<R>>,
);

impl<S: State + 'static, E: 'static, R: 'static> StateBuilder<S, E, R> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            state,
            transitions: Vec::new(),
            on_entry: None,
            on_exit: None,
        }
    }

    pub(crate) fn into_parts(self) -> Declared<S, E, R> {
        (self.state, self.transitions, self.on_entry, self.on_exit)
    }

    /// State being configured.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Start declaring how this state reacts to events accepted by `matcher`.
    ///
    /// Plain event values are matched by equality; pass an
    /// [`EventMatcher`] to match by variant or predicate.
    pub fn on_event(self, matcher: impl Into<EventMatcher<E>>) -> EventBuilder<S, E, R> {
        EventBuilder {
            parent: self,
            matcher: matcher.into(),
            guard: None,
            to: None,
        }
    }

    /// Hook run when a transition enters this state. Replaces any earlier one.
    pub fn on_entry_action<F>(mut self, hook: F) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        self.on_entry = Some(Box::new(hook));
        self
    }

    /// Entry hook that observes the runtime state without replacing it.
    pub fn on_entry_consumer<F>(self, hook: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_entry_action(observe(hook))
    }

    /// Hook run when a transition leaves this state. Replaces any earlier one.
    pub fn on_exit_action<F>(mut self, hook: F) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Exit hook that observes the runtime state without replacing it.
    pub fn on_exit_consumer<F>(self, hook: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_exit_action(observe(hook))
    }
}

fn observe<R: 'static, F>(hook: F) -> impl Fn(R) -> R + Send + Sync + 'static
where
    F: Fn(&R) + Send + Sync + 'static,
{
    move |runtime| {
        hook(&runtime);
        runtime
    }
}

/// Declaration of one transition out of the parent state.
///
/// Every terminal method (`action`, `consumer`, `no_action`, `no_consumer`)
/// appends exactly one transition and returns the parent [`StateBuilder`].
pub struct EventBuilder<S: State + 'static, E: 'static, R: 'static> {
    parent: StateBuilder<S, E, R>,
    matcher: EventMatcher<E>,
    guard: Option<Guard<R, E>>,
    to: Option<S>,
}

impl<S: State + 'static, E: 'static, R: 'static> EventBuilder<S, E, R> {
    /// Only fire when `predicate` holds for the runtime state and event.
    pub fn condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&R, &E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Only fire when `guard` allows it.
    pub fn guard(mut self, guard: Guard<R, E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Destination state. Without it the transition stays in the parent state.
    pub fn change_to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Finish with an action producing the next runtime state.
    pub fn action<F>(self, action: F) -> StateBuilder<S, E, R>
    where
        F: Fn(R, &E) -> R + Send + Sync + 'static,
    {
        self.finish(Box::new(action))
    }

    /// Finish with an action that only observes the runtime state and event.
    pub fn consumer<F>(self, consumer: F) -> StateBuilder<S, E, R>
    where
        F: Fn(&R, &E) + Send + Sync + 'static,
    {
        self.finish(Box::new(move |runtime: R, event: &E| {
            consumer(&runtime, event);
            runtime
        }))
    }

    /// Finish without an action.
    pub fn no_action(self) -> StateBuilder<S, E, R> {
        self.finish(Box::new(|runtime: R, _: &E| identity(runtime)))
    }

    /// Finish without a consumer. Same as [`no_action`](Self::no_action).
    pub fn no_consumer(self) -> StateBuilder<S, E, R> {
        self.no_action()
    }

    fn finish(self, action: TransitionAction<R, E>) -> StateBuilder<S, E, R> {
        let mut parent = self.parent;
        let to = self.to.unwrap_or_else(|| parent.state.clone());
        parent.transitions.push(Transition::new(
            parent.state.clone(),
            self.matcher,
            self.guard,
            to,
            action,
        ));
        parent
    }
}
