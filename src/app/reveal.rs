use leptos::{html, prelude::*, tachys::reactive_graph::OwnedView};
use leptos_use::{
    use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
};
use wasm_bindgen::JsValue;

use crate::reveal::{Intersection, RevealScope, RevealableElement, REVEAL_THRESHOLD};

const PENDING_CLASS: &str = "opacity-0";
const REVEALED_CLASS: &str = "animate-fade-in-up";

/// Handle to a section's reveal scope, shared with its `<Reveal>` children
/// through the context of a [`RevealGroup`].
#[derive(Debug, Clone, Copy)]
pub struct ScrollReveal {
    scope: RwSignal<RevealScope<String>>,
}

impl ScrollReveal {
    pub fn owns(&self, key: &str) -> bool {
        self.scope
            .try_with_untracked(|s| s.owns(key))
            .unwrap_or(false)
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.scope
            .try_with(|s| s.is_revealed(key))
            .unwrap_or(false)
    }

    pub fn delay_ms(&self, key: &str) -> Option<u128> {
        self.scope
            .try_with_untracked(|s| s.delay(key))
            .flatten()
            .map(|d| d.as_millis())
    }

    fn report(&self, reports: &[Intersection<String>]) {
        if let Some(revealed) = self.scope.try_update(|s| s.report(reports)) {
            if !revealed.is_empty() {
                log::debug!("Revealed {revealed:?}");
            }
        }
    }
}

/// `(key, delay_ms)` pairs to reveal elements; a delay of 0 means none.
pub fn reveal_items(items: &[(&str, u64)]) -> Vec<RevealableElement<String>> {
    items
        .iter()
        .map(|(key, delay)| match delay {
            0 => RevealableElement::new(key.to_string()),
            d => RevealableElement::delayed(key.to_string(), *d),
        })
        .collect()
}

/// Creates a reveal scope in the current owner. The scope owns exactly
/// `elements` and is torn down when that owner is cleaned up.
fn use_scroll_reveal(
    elements: impl IntoIterator<Item = RevealableElement<String>>,
) -> ScrollReveal {
    let scope = RwSignal::new(RevealScope::new(elements));
    let reveal = ScrollReveal { scope };
    provide_context(reveal);
    on_cleanup(move || {
        scope.try_update_untracked(|s| s.teardown());
    });
    reveal
}

/// Root of one section's reveal scope. The scope lives in a child owner, so
/// it is only visible to `<Reveal>`s inside `children` and is torn down when
/// the group unmounts.
#[component]
pub fn RevealGroup(items: Vec<RevealableElement<String>>, children: Children) -> impl IntoView {
    let owner = Owner::new();
    let children = owner.with(|| {
        use_scroll_reveal(items);
        children()
    });
    OwnedView::new_with_owner(children, owner)
}

/// Wraps content that fades in the first time it is 10% visible.
#[component]
pub fn Reveal(
    #[prop(into)] key: String,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let reveal = use_context::<ScrollReveal>().filter(|r| r.owns(&key));

    let Some(reveal) = reveal else {
        log::warn!("No reveal scope owns '{key}', rendering it without animation");
        return view! {
            <div class=class>{children()}</div>
        }
        .into_any();
    };

    let observed_key = key.clone();
    use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            let reports = entries
                .iter()
                .map(|entry| Intersection {
                    key: observed_key.clone(),
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect::<Vec<_>>();
            reveal.report(&reports);
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    let is_supported = use_supported(|| {
        js_sys::Reflect::has(&window(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    });
    let unsupported_key = key.clone();
    Effect::new(move |_| {
        if !is_supported.get() {
            log::info!("IntersectionObserver unavailable, '{unsupported_key}' stays hidden");
        }
    });

    let style = reveal
        .delay_ms(&key)
        .map(|ms| format!("transition-delay: {ms}ms; animation-delay: {ms}ms;"))
        .unwrap_or_default();
    let state_class = move || {
        if reveal.is_revealed(&key) {
            format!("{class} {REVEALED_CLASS}")
        } else {
            format!("{class} {PENDING_CLASS}")
        }
    };

    view! {
        <div node_ref=node_ref class=state_class style=style>
            {children()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use leptos::tachys::view::RenderHtml;

    use super::*;

    type Seen = Arc<Mutex<Vec<Option<ScrollReveal>>>>;

    /// Records the reveal scope visible where it is rendered.
    #[component]
    fn RecordScope(seen: Seen) -> impl IntoView {
        seen.lock().unwrap().push(use_context::<ScrollReveal>());
    }

    fn hit(key: &str) -> Intersection<String> {
        Intersection {
            key: key.to_string(),
            ratio: 0.5,
            is_intersecting: true,
        }
    }

    #[test]
    fn test_groups_keep_scopes_to_themselves() {
        let page = Owner::new();
        let seen = Seen::default();
        let (first, second) = (seen.clone(), seen.clone());
        let _view = page.with(|| {
            let view = view! {
                <RevealGroup items=reveal_items(&[("a", 0)])>
                    <RecordScope seen=first />
                </RevealGroup>
                <RevealGroup items=reveal_items(&[("b", 0)])>
                    <RecordScope seen=second />
                </RevealGroup>
            };
            assert!(use_context::<ScrollReveal>().is_none());
            view
        });

        let seen = seen.lock().unwrap();
        let a = seen[0].expect("first group should provide a scope");
        let b = seen[1].expect("second group should provide a scope");
        assert!(a.owns("a") && !a.owns("b"));
        assert!(b.owns("b") && !b.owns("a"));
    }

    #[test]
    fn test_cleanup_stops_reveals() {
        let page = Owner::new();
        let seen = Seen::default();
        let record = seen.clone();
        let _view = page.with(|| {
            view! {
                <RevealGroup items=reveal_items(&[("a", 0), ("b", 0)])>
                    <RecordScope seen=record />
                </RevealGroup>
            }
        });
        let reveal = seen.lock().unwrap()[0].expect("group should provide a scope");

        reveal.report(&[hit("a")]);
        assert!(reveal.is_revealed("a"));

        page.cleanup();
        reveal.report(&[hit("b")]);
        assert!(!reveal.is_revealed("b"));
    }

    #[test]
    fn test_only_owned_keys_animate() {
        let page = Owner::new();
        let seen = Seen::default();
        let record = seen.clone();
        let view = page.with(|| {
            view! {
                <RevealGroup items=reveal_items(&[("seen", 0), ("waiting", 300)])>
                    <RecordScope seen=record />
                    <Reveal key="seen">"shown"</Reveal>
                    <Reveal key="waiting">"later"</Reveal>
                    <Reveal key="stray">"static"</Reveal>
                </RevealGroup>
            }
        });
        let reveal = seen.lock().unwrap()[0].expect("group should provide a scope");
        reveal.report(&[hit("seen"), hit("stray")]);

        let html = page.with(|| view.to_html());
        assert_eq!(html.matches(REVEALED_CLASS).count(), 1);
        assert_eq!(html.matches(PENDING_CLASS).count(), 1);
        assert!(html.contains("transition-delay: 300ms"));
        assert!(html.contains("static"));
    }

    #[test]
    fn test_reveal_items_delays() {
        let items = reveal_items(&[("now", 0), ("soon", 250)]);
        let scope = RevealScope::new(items);
        assert_eq!(scope.delay("now"), None);
        assert_eq!(scope.delay("soon").map(|d| d.as_millis()), Some(250));
    }
}
