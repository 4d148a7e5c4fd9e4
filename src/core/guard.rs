//! Guard predicates for controlling state transitions.
//!
//! A guard is evaluated after the source state and event matcher have both
//! accepted an event. A transition whose guard rejects the event is skipped
//! and the search continues with the next declared transition.

/// Predicate over the current runtime state and the incoming event.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Guard;
///
/// #[derive(Debug, PartialEq)]
/// enum Toss {
///     Heads(u64),
///     Tails(u64),
/// }
///
/// // Only accept slow tosses while fewer than three heads were seen.
/// let guard = Guard::new(|heads: &u32, toss: &Toss| {
///     *heads < 3 && matches!(toss, Toss::Heads(d) | Toss::Tails(d) if *d > 10)
/// });
///
/// assert!(guard.check(&0, &Toss::Heads(20)));
/// assert!(!guard.check(&0, &Toss::Tails(5)));
/// assert!(!guard.check(&3, &Toss::Heads(20)));
/// ```
pub struct Guard<R, E> {
    predicate: Box<dyn Fn(&R, &E) -> bool + Send + Sync>,
}

impl<R, E> Guard<R, E> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should not mutate anything it captures; the engine may
    /// evaluate it for events that end up not firing.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&R, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that accepts every event.
    pub fn always() -> Self {
        Self::new(|_, _| true)
    }

    /// Check if the guard allows the transition for this runtime state and event.
    pub fn check(&self, runtime: &R, event: &E) -> bool {
        (self.predicate)(runtime, event)
    }
}

impl<R, E> Default for Guard<R, E> {
    fn default() -> Self {
        Self::always()
    }
}

impl<R, E> std::fmt::Debug for Guard<R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
