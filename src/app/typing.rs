use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use crate::animate::{TypingCycle, TypingTimings};

/// Types out each phrase in `phrases` one character at a time, holds it,
/// deletes it, and moves on to the next phrase forever. Renders the revealed
/// text next to a pulsing caret glyph (the caret is pure CSS, not part of
/// the cycle's state).
#[component]
pub fn Typewriter(
    phrases: Vec<String>,
    #[prop(default = TypingTimings::default())] timings: TypingTimings,
) -> impl IntoView {
    let cycle = StoredValue::new(
        TypingCycle::new(phrases, timings).expect("Typewriter requires at least one phrase"),
    );
    let (text, set_text) = signal(String::new());
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    // Every tick writes `text`, which re-runs this effect: cancel whatever
    // timer is still pending, then schedule the next step. At most one timer
    // is outstanding per instance at any point.
    Effect::new(move |_| {
        text.track();
        if let Some(prev) = pending.get_value() {
            prev.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                // try_* returns None once the instance is gone, so a timer
                // that outlives teardown is ignored
                if cycle.try_update_value(|c| c.step()).is_none() {
                    return;
                }
                set_text.set(cycle.with_value(|c| c.text().to_string()));
            },
            cycle.with_value(|c| c.delay()),
        )
        .ok();
        pending.set_value(handle);
    });

    // A timer must never fire against an unmounted instance
    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.clear();
        }
    });

    view! {
        <span class="typewriter">
            {text}
            <span class="typewriter-caret ml-1" aria-hidden="true">"|"</span>
        </span>
    }
}
