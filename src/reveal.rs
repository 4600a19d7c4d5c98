//! One-shot scroll reveal bookkeeping.
//!
//! A [`RevealScope`] owns a fixed set of elements, each starting out
//! [`RevealState::Pending`]. Visibility reports from the host (an
//! intersection observer in the browser) flip elements to
//! [`RevealState::Revealed`] the first time they are at least
//! [`REVEAL_THRESHOLD`] visible. Nothing ever flips them back.

use std::{borrow::Borrow, collections::HashMap, hash::Hash, time::Duration};

pub use crate::config::REVEAL_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeState {
    Active,
    TornDown,
}

/// An element the scope is responsible for, with its presentation delay.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealableElement<K> {
    pub key: K,
    pub delay: Option<Duration>,
}

impl<K> RevealableElement<K> {
    pub fn new(key: K) -> Self {
        Self { key, delay: None }
    }

    pub fn delayed(key: K, delay_ms: u64) -> Self {
        Self {
            key,
            delay: Some(Duration::from_millis(delay_ms)),
        }
    }
}

/// A single visibility report for one watched element.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<K> {
    pub key: K,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl<K> Intersection<K> {
    fn qualifies(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Debug, Clone)]
struct Tracked {
    state: RevealState,
    delay: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct RevealScope<K> {
    elements: HashMap<K, Tracked>,
    threshold: f64,
    state: ScopeState,
}

impl<K> RevealScope<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an active scope owning exactly `elements`.
    ///
    /// Duplicate keys collapse into one element; the last delay wins.
    pub fn new(elements: impl IntoIterator<Item = RevealableElement<K>>) -> Self {
        let elements = elements
            .into_iter()
            .map(|el| {
                (
                    el.key,
                    Tracked {
                        state: RevealState::Pending,
                        delay: el.delay,
                    },
                )
            })
            .collect();
        Self {
            elements,
            threshold: REVEAL_THRESHOLD,
            state: ScopeState::Active,
        }
    }

    /// A scope for a root that was never attached. Owns nothing.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_active(&self) -> bool {
        self.state == ScopeState::Active
    }

    pub fn owns<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn state<Q>(&self, key: &Q) -> Option<RevealState>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.get(key).map(|t| t.state)
    }

    pub fn is_revealed<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state(key) == Some(RevealState::Revealed)
    }

    pub fn delay<Q>(&self, key: &Q) -> Option<Duration>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.get(key).and_then(|t| t.delay)
    }

    /// Applies a batch of host reports and returns the keys that were
    /// revealed by it. Reports for unknown or already revealed elements, and
    /// every report after teardown, are ignored.
    pub fn report<'a>(&mut self, entries: impl IntoIterator<Item = &'a Intersection<K>>) -> Vec<K>
    where
        K: 'a,
    {
        if !self.is_active() {
            return Vec::new();
        }
        let threshold = self.threshold;
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.qualifies(threshold) {
                continue;
            }
            if let Some(tracked) = self.elements.get_mut(&entry.key) {
                if tracked.state == RevealState::Pending {
                    tracked.state = RevealState::Revealed;
                    revealed.push(entry.key.clone());
                }
            }
        }
        revealed
    }

    /// Stops the scope. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.state = ScopeState::TornDown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(key: &'static str, ratio: f64) -> Intersection<&'static str> {
        Intersection {
            key,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    fn miss(key: &'static str) -> Intersection<&'static str> {
        Intersection {
            key,
            ratio: 0.0,
            is_intersecting: false,
        }
    }

    fn three() -> RevealScope<&'static str> {
        RevealScope::new(["one", "two", "three"].map(RevealableElement::new))
    }

    #[test]
    fn test_only_reported_element_reveals() {
        let mut scope = three();
        let revealed = scope.report(&[hit("two", 0.5)]);
        assert_eq!(revealed, vec!["two"]);
        assert_eq!(scope.state(&"one"), Some(RevealState::Pending));
        assert_eq!(scope.state(&"two"), Some(RevealState::Revealed));
        assert_eq!(scope.state(&"three"), Some(RevealState::Pending));
    }

    #[test]
    fn test_reveal_is_terminal() {
        let mut scope = three();
        scope.report(&[hit("one", 1.0)]);
        // leaves the viewport, then comes back
        assert!(scope.report(&[miss("one")]).is_empty());
        assert!(scope.is_revealed(&"one"));
        assert!(scope.report(&[hit("one", 0.9)]).is_empty());
        assert!(scope.is_revealed(&"one"));
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut scope = three();
        for _ in 0..10 {
            assert!(scope.report(&[hit("three", 0.05)]).is_empty());
        }
        assert_eq!(scope.state(&"three"), Some(RevealState::Pending));

        assert_eq!(scope.report(&[hit("three", REVEAL_THRESHOLD)]), vec!["three"]);
    }

    #[test]
    fn test_intersecting_flag_required() {
        let mut scope = three();
        let stale = Intersection {
            key: "one",
            ratio: 0.4,
            is_intersecting: false,
        };
        assert!(scope.report(&[stale]).is_empty());
        assert!(!scope.is_revealed(&"one"));
    }

    #[test]
    fn test_batch_reveals_independently() {
        let mut scope = three();
        let mut revealed = scope.report(&[hit("three", 0.2), miss("two"), hit("one", 0.7)]);
        revealed.sort();
        assert_eq!(revealed, vec!["one", "three"]);
        assert!(!scope.is_revealed(&"two"));
    }

    #[test]
    fn test_teardown_twice_and_no_reveal_after() {
        let mut scope = three();
        scope.report(&[hit("one", 1.0)]);
        scope.teardown();
        scope.teardown();
        assert!(!scope.is_active());

        assert!(scope.report(&[hit("two", 1.0)]).is_empty());
        assert!(!scope.is_revealed(&"two"));
        // earlier reveals are kept
        assert!(scope.is_revealed(&"one"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut scope = three();
        assert!(scope.report(&[hit("added-later", 1.0)]).is_empty());
        assert!(!scope.owns(&"added-later"));
        assert_eq!(scope.state(&"added-later"), None);
        assert_eq!(scope.len(), 3);
    }

    #[test]
    fn test_empty_scope_is_noop() {
        let mut scope = RevealScope::<&'static str>::empty();
        assert!(scope.is_empty());
        assert!(scope.report(&[hit("one", 1.0)]).is_empty());
        scope.teardown();
    }

    #[test]
    fn test_delays_are_kept_per_element() {
        let scope = RevealScope::new([
            RevealableElement::new("heading"),
            RevealableElement::delayed("card", 400),
        ]);
        assert_eq!(scope.delay(&"heading"), None);
        assert_eq!(scope.delay(&"card"), Some(Duration::from_millis(400)));
        assert_eq!(scope.threshold(), 0.1);
    }
}
