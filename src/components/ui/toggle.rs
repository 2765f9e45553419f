use leptos::prelude::*;

/// Labelled switch that reveals an optional form field.
#[component]
pub fn Toggle(
    id: &'static str,
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="toggle inline-flex items-center gap-2 cursor-pointer" for=id>
            <input
                id=id
                type="checkbox"
                class="sr-only peer"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
            <span class="toggle-track"></span>
            <span class="text-sm text-slate-600">{label}</span>
        </label>
    }
}
