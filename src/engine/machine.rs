//! Engine that dispatches events against an immutable transition table.

use crate::core::State;
use crate::engine::run::Run;
use crate::engine::transition::{HookTable, Transition};
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use tracing::trace;

/// Immutable, reusable finite state machine.
///
/// Holds the initial state, the transitions in declaration order and the
/// entry/exit hook tables. It keeps no execution state of its own: every run
/// lives in a [`Run`] owned by the caller, so one engine can drive any number
/// of independent runs.
pub struct Engine<S: State, E, R = ()> {
    initial: S,
    transitions: Vec<Transition<S, E, R>>,
    on_entry: HookTable<S, R>,
    on_exit: HookTable<S, R>,
}

impl<S: State, E, R> Engine<S, E, R> {
    pub(crate) fn new(
        initial: S,
        transitions: Vec<Transition<S, E, R>>,
        on_entry: HookTable<S, R>,
        on_exit: HookTable<S, R>,
    ) -> Self {
        Self {
            initial,
            transitions,
            on_entry,
            on_exit,
        }
    }

    /// State every run starts in.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Transitions in declaration order.
    pub fn transitions(&self) -> &[Transition<S, E, R>] {
        &self.transitions
    }

    /// Whether an entry hook is registered for `state`.
    pub fn has_entry_hook(&self, state: &S) -> bool {
        self.on_entry.contains(state)
    }

    /// Whether an exit hook is registered for `state`.
    pub fn has_exit_hook(&self, state: &S) -> bool {
        self.on_exit.contains(state)
    }

    /// Begin a run in the initial state. No hooks fire.
    pub fn start(&self, runtime: R) -> Run<S, R> {
        Run::new(self.initial.clone(), runtime)
    }
}

impl<S: State, E: Debug, R> Engine<S, E, R> {
    /// Feed `events` one at a time, returning the run after the last one.
    ///
    /// For each event the first declared transition whose source state,
    /// matcher and guard all accept it fires: the exit hook of the source
    /// state, then the transition action, then the entry hook of the
    /// destination state, each receiving the previous one's runtime value.
    /// Self-transitions fire both hooks too. Events nothing accepts leave the
    /// run untouched.
    pub fn process<I>(&self, run: Run<S, R>, events: I) -> Run<S, R>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        events
            .into_iter()
            .fold(run, |run, event| self.step(run, event.borrow()))
    }

    /// Feed a single event.
    pub fn step(&self, run: Run<S, R>, event: &E) -> Run<S, R> {
        let Some((index, transition)) = self.find_transition(&run, event) else {
            trace!(state = run.state.name(), ?event, "no transition, event ignored");
            return run;
        };

        trace!(
            from = transition.from().name(),
            to = transition.to().name(),
            index,
            ?event,
            "transition fired"
        );

        let runtime = self.on_exit.apply(transition.from(), run.runtime);
        let runtime = transition.apply(runtime, event);
        let runtime = self.on_entry.apply(transition.to(), runtime);

        Run::new(transition.to().clone(), runtime)
    }

    /// First transition, in declaration order, that fires for `event`.
    pub fn find_transition(
        &self,
        run: &Run<S, R>,
        event: &E,
    ) -> Option<(usize, &Transition<S, E, R>)> {
        self.transitions
            .iter()
            .enumerate()
            .find(|(_, t)| t.can_fire(&run.state, &run.runtime, event))
    }
}

impl<S: State, E: Debug> Engine<S, E, ()> {
    /// Drive a machine without runtime state, returning only the final state.
    pub fn advance<I>(&self, state: S, events: I) -> S
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        self.process(Run::new(state, ()), events).state
    }
}

impl<S: State, E, R> Debug for Engine<S, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("initial", &self.initial)
            .field("transitions", &self.transitions)
            .field("on_entry", &self.on_entry)
            .field("on_exit", &self.on_exit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::EngineBuilder;
    use crate::core::EventMatcher;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Door {
        Closed,
        Open,
        Locked,
    }

    impl State for Door {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "Closed",
                Self::Open => "Open",
                Self::Locked => "Locked",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum Action {
        Push,
        Pull,
        Lock(u32),
        Knock,
    }

    type Trace = Arc<Mutex<Vec<String>>>;

    fn record(trace: &Trace, entry: &str) {
        trace.lock().unwrap().push(entry.to_string());
    }

    fn traced_door(trace: &Trace) -> Engine<Door, Action> {
        let (t1, t2, t3, t4, t5, t6) = (
            trace.clone(),
            trace.clone(),
            trace.clone(),
            trace.clone(),
            trace.clone(),
            trace.clone(),
        );
        EngineBuilder::<Door, Action>::new()
            .initial_state(Door::Closed)
            .on_state(Door::Closed, move |s| {
                s.on_exit_consumer(move |_| record(&t1, "exit Closed"))
                    .on_entry_consumer(move |_| record(&t2, "enter Closed"))
                    .on_event(Action::Pull)
                    .change_to(Door::Open)
                    .consumer(move |_, _| record(&t3, "open"))
                    .on_event(Action::Knock)
                    .consumer(move |_, _| record(&t4, "knock"))
            })
            .on_state(Door::Open, move |s| {
                s.on_entry_consumer(move |_| record(&t5, "enter Open"))
                    .on_event(Action::Push)
                    .change_to(Door::Closed)
                    .consumer(move |_, _| record(&t6, "close"))
            })
            .build()
            .unwrap()
    }

    #[test]
    fn start_returns_initial_state_without_hooks() {
        let trace = Trace::default();
        let engine = traced_door(&trace);

        let run = engine.start(());

        assert_eq!(run.state, Door::Closed);
        assert!(trace.lock().unwrap().is_empty());
    }

    #[test]
    fn hooks_fire_exit_action_entry_in_order() {
        let trace = Trace::default();
        let engine = traced_door(&trace);

        let run = engine.process(engine.start(()), [Action::Pull]);

        assert_eq!(run.state, Door::Open);
        assert_eq!(
            *trace.lock().unwrap(),
            vec!["exit Closed", "open", "enter Open"]
        );
    }

    #[test]
    fn self_transition_fires_both_hooks() {
        let trace = Trace::default();
        let engine = traced_door(&trace);

        let run = engine.process(engine.start(()), [Action::Knock]);

        assert_eq!(run.state, Door::Closed);
        assert_eq!(
            *trace.lock().unwrap(),
            vec!["exit Closed", "knock", "enter Closed"]
        );
    }

    #[test]
    fn unmatched_event_is_a_no_op() {
        let trace = Trace::default();
        let engine = traced_door(&trace);

        let run = engine.process(engine.start(()), [Action::Push, Action::Lock(1)]);

        assert_eq!(run.state, Door::Closed);
        assert!(trace.lock().unwrap().is_empty());
    }

    #[test]
    fn first_declared_transition_wins() {
        let engine = EngineBuilder::<Door, Action, Vec<&'static str>>::new()
            .initial_state(Door::Closed)
            .on_state(Door::Closed, |s| {
                s.on_event(EventMatcher::variant(&Action::Lock(0)))
                    .change_to(Door::Locked)
                    .action(|mut log, _| {
                        log.push("first");
                        log
                    })
                    .on_event(Action::Lock(7))
                    .change_to(Door::Open)
                    .action(|mut log, _| {
                        log.push("second");
                        log
                    })
            })
            .build()
            .unwrap();

        let run = engine.process(engine.start(Vec::new()), [Action::Lock(7)]);

        assert_eq!(run.state, Door::Locked);
        assert_eq!(run.runtime, vec!["first"]);
    }

    #[test]
    fn failing_guard_falls_through_to_next_transition() {
        let engine = EngineBuilder::<Door, Action, u32>::new()
            .initial_state(Door::Closed)
            .on_state(Door::Closed, |s| {
                s.on_event(EventMatcher::variant(&Action::Lock(0)))
                    .condition(|_, e| matches!(e, Action::Lock(code) if *code == 1234))
                    .change_to(Door::Locked)
                    .action(|n, _| n + 100)
                    .on_event(EventMatcher::variant(&Action::Lock(0)))
                    .action(|n, _| n + 1)
            })
            .build()
            .unwrap();

        let wrong_code = engine.process(engine.start(0), [Action::Lock(1)]);
        assert_eq!(wrong_code, Run::new(Door::Closed, 1));

        let right_code = engine.process(engine.start(0), [Action::Lock(1234)]);
        assert_eq!(right_code, Run::new(Door::Locked, 100));
    }

    #[test]
    fn guard_sees_runtime_after_previous_events() {
        let engine = EngineBuilder::<Door, Action, u32>::new()
            .initial_state(Door::Closed)
            .on_state(Door::Closed, |s| {
                s.on_event(Action::Knock)
                    .condition(|knocks, _| *knocks < 2)
                    .action(|n, _| n + 1)
            })
            .build()
            .unwrap();

        let run = engine.process(
            engine.start(0),
            [Action::Knock, Action::Knock, Action::Knock, Action::Knock],
        );

        assert_eq!(run.runtime, 2);
    }

    #[test]
    fn runtime_threads_through_hooks_and_action() {
        let engine = EngineBuilder::<Door, Action, Vec<&'static str>>::new()
            .initial_state(Door::Closed)
            .on_state(Door::Closed, |s| {
                s.on_exit_action(|mut log| {
                    log.push("exit");
                    log
                })
                .on_event(Action::Pull)
                .change_to(Door::Open)
                .action(|mut log, _| {
                    log.push("action");
                    log
                })
            })
            .on_state(Door::Open, |s| {
                s.on_entry_action(|mut log| {
                    log.push("entry");
                    log
                })
            })
            .build()
            .unwrap();

        let run = engine.process(engine.start(Vec::new()), &[Action::Pull]);

        assert_eq!(run.runtime, vec!["exit", "action", "entry"]);
    }

    #[test]
    fn engine_is_reusable_across_runs() {
        let trace = Trace::default();
        let engine = traced_door(&trace);

        let first = engine.process(engine.start(()), [Action::Pull]);
        let second = engine.start(());

        assert_eq!(first.state, Door::Open);
        assert_eq!(second.state, Door::Closed);
        assert_eq!(engine.advance(Door::Open, [Action::Push]), Door::Closed);
    }

    #[test]
    fn find_transition_reports_declaration_index() {
        let trace = Trace::default();
        let engine = traced_door(&trace);

        let (index, transition) = engine
            .find_transition(&engine.start(()), &Action::Knock)
            .unwrap();

        assert_eq!(index, 1);
        assert!(transition.is_self_transition());
        assert!(engine
            .find_transition(&engine.start(()), &Action::Push)
            .is_none());
    }

    #[test]
    fn panicking_action_keeps_exit_hook_effects() {
        let trace = Trace::default();
        let (exits, entries) = (trace.clone(), trace.clone());
        let engine = EngineBuilder::<Door, Action, u32>::new()
            .initial_state(Door::Closed)
            .on_state(Door::Closed, move |s| {
                s.on_exit_consumer(move |_| record(&exits, "exit Closed"))
                    .on_event(Action::Pull)
                    .change_to(Door::Open)
                    .action(|_, _| panic!("jammed"))
            })
            .on_state(Door::Open, move |s| {
                s.on_entry_consumer(move |_| record(&entries, "enter Open"))
            })
            .build()
            .unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            engine.process(engine.start(0), [Action::Pull])
        }));

        assert!(result.is_err());
        assert_eq!(*trace.lock().unwrap(), vec!["exit Closed"]);
    }

    #[test]
    fn events_without_equality_dispatch_by_variant() {
        #[derive(Debug)]
        enum Job {
            Start(Box<dyn std::error::Error + Send + Sync>),
            Stop,
        }

        let engine = EngineBuilder::<Door, Job>::new()
            .initial_state(Door::Closed)
            .on_state(Door::Closed, |s| {
                s.on_event(EventMatcher::variant(&Job::Stop))
                    .change_to(Door::Locked)
                    .no_action()
                    .on_event(EventMatcher::predicate("Start", |j: &Job| {
                        matches!(j, Job::Start(_))
                    }))
                    .change_to(Door::Open)
                    .no_action()
            })
            .build()
            .unwrap();

        assert_eq!(engine.advance(Door::Closed, [Job::Stop]), Door::Locked);
        assert_eq!(
            engine.advance(Door::Closed, [Job::Start("no disk".into())]),
            Door::Open
        );
    }
}
