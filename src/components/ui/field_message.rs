//! Error line under a form field. The line always occupies its space and is
//! toggled with `visibility`, so showing an error never shifts the layout.
//! Messages must be safe to render and never include secrets.

use crate::features::shortener::state::FieldError;
use leptos::prelude::*;

#[component]
pub fn FieldMessage(id: &'static str, #[prop(into)] error: Signal<FieldError>) -> impl IntoView {
    view! {
        <p
            id=id
            class="error-message text-xs text-red-600"
            role="alert"
            style:visibility=move || {
                if error.with(|error| error.visible) { "visible" } else { "hidden" }
            }
        >
            {move || error.with(|error| error.message.clone())}
        </p>
    }
}
