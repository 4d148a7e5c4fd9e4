//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::State;
use crate::engine::{Engine, HookTable, Transition};
use tracing::debug;

/// Builder for constructing engines with a fluent API.
///
/// Transitions are appended in the order they are declared, across all
/// `on_state` calls, and that order is the order the engine searches them
/// in. Configuring the same state twice adds to its transitions, while a
/// second entry or exit hook for a state replaces the first.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::EngineBuilder;
/// use switchyard::state_enum;
///
/// state_enum! {
///     enum Turnstile {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// #[derive(Debug, PartialEq)]
/// enum Input {
///     Coin,
///     Push,
/// }
///
/// let engine = EngineBuilder::<Turnstile, Input, u32>::new()
///     .initial_state(Turnstile::Locked)
///     .on_state(Turnstile::Locked, |s| {
///         s.on_event(Input::Coin)
///             .change_to(Turnstile::Unlocked)
///             .action(|coins, _| coins + 1)
///     })
///     .on_state(Turnstile::Unlocked, |s| {
///         s.on_event(Input::Push).change_to(Turnstile::Locked).no_action()
///     })
///     .build()
///     .unwrap();
///
/// let run = engine.process(engine.start(0), [Input::Coin, Input::Push, Input::Coin]);
/// assert_eq!(run.state, Turnstile::Unlocked);
/// assert_eq!(run.runtime, 2);
/// ```
pub struct EngineBuilder<S: State + 'static, E: 'static, R: 'static = ()> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E, R>>,
    on_entry: HookTable<S, R>,
    on_exit: HookTable<S, R>,
}

impl<S: State + 'static, E: 'static, R: 'static> EngineBuilder<S, E, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            on_entry: HookTable::new(),
            on_exit: HookTable::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Configure `state` through a scoped [`StateBuilder`].
    ///
    /// The configurator receives a fresh builder for `state` and returns it
    /// once its declarations are done; everything declared is then merged
    /// into this builder.
    pub fn on_state<F>(mut self, state: S, configure: F) -> Self
    where
        F: FnOnce(StateBuilder<S, E, R>) -> StateBuilder<S, E, R>,
    {
        let declared = configure(StateBuilder::new(state));
        let (state, transitions, on_entry, on_exit) = declared.into_parts();

        self.transitions.extend(transitions);
        if let Some(hook) = on_entry {
            self.on_entry.set(state.clone(), hook);
        }
        if let Some(hook) = on_exit {
            self.on_exit.set(state, hook);
        }
        self
    }

    /// Build the engine.
    /// Returns an error if no initial state was set.
    pub fn build(self) -> Result<Engine<S, E, R>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        debug!(
            initial = initial.name(),
            transitions = self.transitions.len(),
            entry_hooks = self.on_entry.len(),
            exit_hooks = self.on_exit.len(),
            "engine built"
        );

        Ok(Engine::new(
            initial,
            self.transitions,
            self.on_entry,
            self.on_exit,
        ))
    }
}

impl<S: State + 'static, E: 'static, R: 'static> Default for EngineBuilder<S, E, R> {
    fn default() -> Self {
        Self::new()
    }
}
