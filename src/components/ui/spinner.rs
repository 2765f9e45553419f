use leptos::prelude::*;

/// Small inline spinner shown inside the shorten button while a request is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span
            class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-white/40 border-t-white align-middle"
            role="status"
            aria-live="polite"
            aria-label="Shortening"
        ></span>
    }
}
