//! Event matchers.
//!
//! A matcher decides whether a transition reacts to an incoming event. Events
//! can be matched by exact value, by enum variant regardless of payload, or by
//! an arbitrary predicate. Every matcher carries a label used for
//! introspection and diagram output.

use std::fmt::{self, Debug};
use std::mem::Discriminant;
use std::sync::Arc;

type EventPredicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Decides which events a transition accepts.
///
/// # Example
///
/// ```rust
/// use switchyard::core::EventMatcher;
///
/// #[derive(Debug, PartialEq)]
/// enum Toss {
///     Heads(u64),
///     Tails(u64),
/// }
///
/// let exact = EventMatcher::value(Toss::Heads(3));
/// assert!(exact.matches(&Toss::Heads(3)));
/// assert!(!exact.matches(&Toss::Heads(4)));
///
/// let any_heads = EventMatcher::variant(&Toss::Heads(0));
/// assert!(any_heads.matches(&Toss::Heads(4)));
/// assert!(!any_heads.matches(&Toss::Tails(4)));
/// assert_eq!(any_heads.label(), "Heads");
/// ```
pub enum EventMatcher<E> {
    /// Accepts events equal to a stored value.
    Value {
        label: String,
        equals: EventPredicate<E>,
    },

    /// Accepts any event of the same enum variant, ignoring its payload.
    Variant {
        discriminant: Discriminant<E>,
        label: String,
    },

    /// Accepts events for which the predicate holds.
    Predicate {
        label: String,
        predicate: EventPredicate<E>,
    },
}

impl<E: PartialEq + Debug + Send + Sync + 'static> EventMatcher<E> {
    /// Match by equality against `event`.
    ///
    /// The label is the event's `Debug` output. A string event loses its
    /// surrounding quotes but keeps any escapes, so events containing quotes
    /// or control characters read better through [`EventMatcher::named`].
    pub fn value(event: E) -> Self {
        let label = unquote(format!("{event:?}"));
        EventMatcher::named(label, event)
    }
}

impl<E: PartialEq + Send + Sync + 'static> EventMatcher<E> {
    /// Match by equality against `event`, labelled `label`.
    pub fn named(label: impl Into<String>, event: E) -> Self {
        EventMatcher::Value {
            label: label.into(),
            equals: Arc::new(move |candidate: &E| *candidate == event),
        }
    }
}

impl<E: Debug> EventMatcher<E> {
    /// Match every event sharing the variant of `sample`.
    ///
    /// The label is the variant name taken from the sample's `Debug` output.
    pub fn variant(sample: &E) -> Self {
        EventMatcher::Variant {
            discriminant: std::mem::discriminant(sample),
            label: variant_name(&format!("{sample:?}")).to_string(),
        }
    }
}

impl<E> EventMatcher<E> {
    /// Match every event for which `predicate` returns true.
    pub fn predicate<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        EventMatcher::Predicate {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Check whether this matcher accepts `event`.
    pub fn matches(&self, event: &E) -> bool {
        match self {
            EventMatcher::Value { equals, .. } => equals(event),
            EventMatcher::Variant { discriminant, .. } => {
                *discriminant == std::mem::discriminant(event)
            }
            EventMatcher::Predicate { predicate, .. } => predicate(event),
        }
    }

    /// Label describing the accepted events.
    pub fn label(&self) -> &str {
        match self {
            EventMatcher::Value { label, .. }
            | EventMatcher::Variant { label, .. }
            | EventMatcher::Predicate { label, .. } => label,
        }
    }
}

impl<E: PartialEq + Debug + Send + Sync + 'static> From<E> for EventMatcher<E> {
    fn from(event: E) -> Self {
        EventMatcher::value(event)
    }
}

impl<E> Debug for EventMatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            EventMatcher::Value { .. } => "Value",
            EventMatcher::Variant { .. } => "Variant",
            EventMatcher::Predicate { .. } => "Predicate",
        };
        f.debug_tuple(kind).field(&self.label()).finish()
    }
}

fn unquote(debug: String) -> String {
    match debug.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(unquoted) => unquoted.to_string(),
        None => debug,
    }
}

/// Variant identifier at the head of a `Debug` rendering: `Heads(3)` -> `Heads`.
fn variant_name(debug: &str) -> &str {
    let end = debug
        .find(|c: char| c == '(' || c == '{' || c.is_whitespace())
        .unwrap_or(debug.len());
    &debug[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Toss {
        Heads(u64),
        Tails(u64),
        Miracle { spin: u64 },
        Dropped,
    }

    #[test]
    fn value_matches_by_equality() {
        let matcher = EventMatcher::value(Toss::Tails(2));

        assert!(matcher.matches(&Toss::Tails(2)));
        assert!(!matcher.matches(&Toss::Tails(3)));
        assert!(!matcher.matches(&Toss::Heads(2)));
        assert_eq!(matcher.label(), "Tails(2)");
    }

    #[test]
    fn variant_ignores_payload() {
        let matcher = EventMatcher::variant(&Toss::Miracle { spin: 0 });

        assert!(matcher.matches(&Toss::Miracle { spin: 42 }));
        assert!(!matcher.matches(&Toss::Dropped));
        assert_eq!(matcher.label(), "Miracle");
    }

    #[test]
    fn variant_label_of_unit_variant() {
        let matcher = EventMatcher::variant(&Toss::Dropped);

        assert_eq!(matcher.label(), "Dropped");
        assert!(matcher.matches(&Toss::Dropped));
    }

    #[test]
    fn predicate_uses_closure_and_label() {
        let matcher = EventMatcher::predicate("SlowToss", |e: &Toss| match e {
            Toss::Heads(d) | Toss::Tails(d) => *d > 10,
            _ => false,
        });

        assert!(matcher.matches(&Toss::Heads(11)));
        assert!(!matcher.matches(&Toss::Heads(10)));
        assert!(!matcher.matches(&Toss::Dropped));
        assert_eq!(matcher.label(), "SlowToss");
    }

    #[test]
    fn plain_values_convert_into_value_matchers() {
        let matcher: EventMatcher<&str> = "coin".into();

        assert!(matcher.matches(&"coin"));
        assert!(!matcher.matches(&"push"));
        assert_eq!(matcher.label(), "coin");
    }

    #[test]
    fn named_value_keeps_explicit_label() {
        let debug_label = EventMatcher::value("say \"hi\"");
        let matcher = EventMatcher::named("say \"hi\"", "say \"hi\"");

        assert_eq!(debug_label.label(), r#"say \"hi\""#);
        assert_eq!(matcher.label(), "say \"hi\"");
        assert!(matcher.matches(&"say \"hi\""));
        assert!(!matcher.matches(&"say hi"));
    }

    #[test]
    fn variant_and_predicate_need_no_equality() {
        #[derive(Debug)]
        enum Job {
            Start(Box<dyn std::error::Error + Send + Sync>),
            Stop,
        }

        let stop = EventMatcher::variant(&Job::Stop);
        let failing = EventMatcher::predicate("Start", |j: &Job| matches!(j, Job::Start(_)));
        let start = Job::Start("disk full".into());

        assert!(stop.matches(&Job::Stop));
        assert!(!stop.matches(&start));
        assert!(failing.matches(&start));
        assert_eq!(format!("{stop:?}"), r#"Variant("Stop")"#);
    }

    #[test]
    fn variant_name_stops_at_payload() {
        assert_eq!(variant_name("Heads(3)"), "Heads");
        assert_eq!(variant_name("Miracle { spin: 1 }"), "Miracle");
        assert_eq!(variant_name("Dropped"), "Dropped");
        assert_eq!(variant_name(""), "");
    }
}
