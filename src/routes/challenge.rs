//! Challenge page for password-protected shortlinks.
//!
//! The modal opens as soon as the page mounts and focuses the password input.
//! Each Enter sends one unlock request for the slug in the current path.

use crate::{
    app_lib::ModalPhase,
    components::Modal,
    features::challenge::{
        ChallengeOutcome, ChallengeState, browser,
        client::{HttpProtectedContentApi, unlock},
    },
};
use leptos::{ev, html, prelude::*};

#[component]
pub fn ChallengePage() -> impl IntoView {
    let state = RwSignal::new(ChallengeState::default());
    let phase = RwSignal::new(ModalPhase::Hidden);
    let password_input = NodeRef::<html::Input>::new();

    let focus_password = move || {
        if let Some(input) = password_input.get_untracked() {
            let _ = input.focus();
        }
    };

    Effect::new(move |_| {
        if password_input.get().is_some() {
            phase.update(|phase| *phase = phase.open());
            focus_password();
        }
    });

    let unlock_action = Action::new_local(move |password: &String| {
        let password = password.clone();
        async move {
            let pathname = web_sys::window()
                .and_then(|window| window.location().pathname().ok())
                .unwrap_or_default();
            unlock(&HttpProtectedContentApi, &pathname, &password).await
        }
    });

    Effect::new(move |_| {
        let Some(result) = unlock_action.value().get() else {
            return;
        };
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = %err, "unlock request failed");
                return;
            }
        };

        state.update(|state| state.apply(&outcome));
        let followup = match &outcome {
            ChallengeOutcome::Redirect(url) => browser::redirect(url),
            ChallengeOutcome::Reveal(body) => browser::open_in_new_tab(body),
            ChallengeOutcome::InvalidPassword => {
                focus_password();
                Ok(())
            }
            ChallengeOutcome::Unhandled { .. } => Ok(()),
        };
        if let Err(err) = followup {
            tracing::error!(error = %err, "failed to open unlocked shortlink");
        }
    });

    let on_keydown = move |event: ev::KeyboardEvent| {
        if event.key() == "Enter" {
            event.prevent_default();
            unlock_action.dispatch(state.with_untracked(|state| state.password.clone()));
        }
    };

    view! {
        <Modal id="challenge-modal" phase=phase>
            <div class="space-y-3">
                <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400">
                    "Protected"
                </p>
                <h1 class="text-xl font-semibold text-slate-900">
                    "This shortlink requires a password"
                </h1>
                <input
                    id="required-password-input"
                    type="password"
                    node_ref=password_input
                    autocomplete="current-password"
                    class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                    prop:value=move || state.with(|state| state.password.clone())
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        state.update(|state| state.password = value);
                    }
                    on:keydown=on_keydown
                />
                <p
                    class="password-tip text-sm text-slate-500"
                    style:display=move || {
                        if state.with(|state| state.hint_visible) { "block" } else { "none" }
                    }
                >
                    "Enter the password and press Enter."
                </p>
                <p
                    class="invalid-password text-sm text-red-600"
                    role="alert"
                    style:display=move || {
                        if state.with(|state| state.invalid_password_visible) {
                            "block"
                        } else {
                            "none"
                        }
                    }
                >
                    "Invalid password. Please try again."
                </p>
            </div>
        </Modal>
    }
}
