//! Rotating headline text

use folio_core::{LabelCycle, ROTATION_INTERVAL};
use leptos::*;

/// Cycles through `texts` on a fixed cadence, showing one at a time.
///
/// The interval starts once the component is live in the browser and its
/// handle is cleared again at teardown, so no tick can fire against a
/// removed widget. An empty `texts` is a configuration error and fails
/// fast at construction.
#[component]
pub fn RotatingText(
    /// Labels to rotate through; must contain at least one entry.
    texts: Vec<String>,
    /// Extra classes applied to the rendered span.
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let cycle = LabelCycle::new(texts).expect("RotatingText requires at least one label");
    let (cycle, set_cycle) = create_signal(cycle);

    // Effects only run in the browser, so the server render stays at the
    // first label and the timer exists purely client-side.
    create_effect(move |_| {
        match set_interval_with_handle(
            move || set_cycle.update(LabelCycle::advance),
            ROTATION_INTERVAL,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::error!("failed to start rotation interval: {err:?}"),
        }
    });

    view! {
        <span class=format!("inline-block transition-all duration-500 {class}")>
            {move || cycle.with(|c| c.current().to_string())}
        </span>
    }
}
