use leptos::{html, prelude::*};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::animate::RevealOnce;

/// Fraction of the wrapped block that must enter the viewport before the
/// reveal transition fires.
const REVEAL_THRESHOLD: f64 = 0.1;

type IntersectionCallback = Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>;

/// Wraps a block of content that starts translated-down and transparent, then
/// settles into place the first time it scrolls into view. The latch is
/// one-shot: scrolling back out never hides the content again.
///
/// If the environment has no `IntersectionObserver`, the content is revealed
/// immediately instead of staying hidden.
#[component]
pub fn RevealOnScroll(children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (settled, set_settled) = signal(false);

    let latch = StoredValue::new(RevealOnce::new());
    let observer = StoredValue::new_local(None::<IntersectionObserver>);
    // the JS closure must outlive every callback the observer may deliver
    let callback = StoredValue::new_local(None::<IntersectionCallback>);

    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if observer.with_value(|o| o.is_some()) || latch.with_value(|l| l.is_visible()) {
            return;
        }

        let on_intersect: IntersectionCallback = Closure::new(
            move |entries: Vec<IntersectionObserverEntry>, obs: IntersectionObserver| {
                let entered = entries.iter().any(|e| e.is_intersecting());
                // try_update_value returns None once the instance is gone, so
                // a late callback after teardown is ignored
                if latch
                    .try_update_value(|l| l.observe(entered))
                    .unwrap_or(false)
                {
                    set_settled.set(true);
                    // trigger-once: stop observing after the first reveal
                    obs.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
        match IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(obs) => {
                obs.observe(&el);
                observer.set_value(Some(obs));
                callback.set_value(Some(on_intersect));
            }
            Err(_) => {
                // fail open: content must never stay hidden just because the
                // environment cannot observe it
                log::warn!("IntersectionObserver unavailable; revealing content immediately");
                latch.update_value(|l| l.reveal());
                set_settled.set(true);
            }
        }
    });

    on_cleanup(move || {
        if let Some(Some(obs)) = observer.try_get_value() {
            obs.disconnect();
        }
        callback.try_update_value(|c| c.take());
    });

    view! {
        <div
            node_ref=node_ref
            class=move || {
                if settled.get() { "section-reveal settled" } else { "section-reveal" }
            }
        >
            {children()}
        </div>
    }
}
