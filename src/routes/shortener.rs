//! Shortener page: URL or workflow input, optional vanity slug and password,
//! and the success modal.

use crate::{
    app_lib::{AppError, GIT_COMMIT_HASH, ModalPhase, PKG_VERSION, config::AppConfig},
    components::{Button, FieldMessage, Modal, Spinner, Toggle},
    features::shortener::{
        CreateReply, ServerErrorRoute, ShortenerState, SuccessCopy, ValidatedSubmission,
        client::{HttpShortlinkApi, create_shortlink},
        confetti::throw_confetti,
    },
};
use gloo_timers::callback::Timeout;
use leptos::{ev, ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_dom::helpers::window_event_listener;
use wasm_bindgen_futures::JsFuture;

/// How long the shortlink reads "Copied to clipboard!" after a copy.
const COPIED_FEEDBACK_MS: u32 = 1_500;

#[derive(Clone, Debug)]
struct CreatedView {
    url: String,
    copy: SuccessCopy,
}

#[component]
pub fn ShortenerPage() -> impl IntoView {
    let config = StoredValue::new(AppConfig::load());
    let form = RwSignal::new(ShortenerState::default());
    let success_phase = RwSignal::new(ModalPhase::Hidden);
    let created = RwSignal::new(None::<CreatedView>);
    let (copied, set_copied) = signal(false);

    let create_action = Action::new_local(move |validated: &ValidatedSubmission| {
        let validated = validated.clone();
        let api = HttpShortlinkApi::new(&config.get_value());
        async move {
            let reply = create_shortlink(&api, &validated).await?;
            Ok::<_, AppError>((validated, reply))
        }
    });

    Effect::new(move |_| {
        let Some(result) = create_action.value().get() else {
            return;
        };
        match result {
            Ok((validated, CreateReply::Created(shortlink))) => {
                tracing::info!(
                    slug = %shortlink.slug,
                    kind = validated.kind.as_str(),
                    "shortlink created"
                );
                let url = config.with_value(|config| config.shortlink_url(&shortlink.slug));
                let copy = SuccessCopy::for_shortlink(
                    validated.kind,
                    validated.submission.has_password(),
                );
                set_copied.set(false);
                created.set(Some(CreatedView { url, copy }));
                success_phase.update(|phase| *phase = phase.open());
                throw_confetti();
            }
            Ok((_, CreateReply::Refused { code })) => {
                if let Some(ServerErrorRoute::Unhandled { code }) =
                    form.try_update(|form| form.apply_error_code(&code))
                {
                    tracing::warn!(code = %code, "no field displays this error code");
                }
            }
            Err(err) => tracing::warn!(error = %err, "shortlink request failed"),
        }
    });

    let close_success = move || {
        if success_phase.get_untracked().is_displayed() {
            success_phase.update(|phase| *phase = phase.close());
            form.update(ShortenerState::reset);
        }
    };

    let escape_listener = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            close_success();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        match form.try_update(ShortenerState::prepare) {
            Some(Ok(validated)) => {
                create_action.dispatch(validated);
            }
            Some(Err(rejection)) => {
                tracing::debug!(reason = %rejection, "submission rejected before sending");
            }
            None => {}
        }
    };

    let copy_shortlink = move |_: ev::MouseEvent| {
        let Some(view) = created.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match copy_to_clipboard(&view.url).await {
                Ok(()) => {
                    set_copied.set(true);
                    Timeout::new(COPIED_FEEDBACK_MS, move || {
                        let _ = set_copied.try_set(false);
                    })
                    .forget();
                }
                Err(err) => tracing::error!(error = %err, "failed to copy shortlink"),
            }
        });
    };

    let submit_disabled = Signal::derive(move || {
        let ready = form.with(ShortenerState::can_submit);
        !ready || create_action.pending().get()
    });
    let toggle_vanity_url = Callback::new(move |()| form.update(ShortenerState::toggle_vanity_url));
    let toggle_password = Callback::new(move |()| form.update(ShortenerState::toggle_password));
    let vanity_url_error = Signal::derive(move || form.with(|form| form.errors.vanity_url.clone()));
    let submit_title = Signal::derive(move || form.with(ShortenerState::submit_hint));

    view! {
        <main class="mx-auto flex min-h-screen max-w-2xl flex-col justify-center gap-6 px-6 py-10">
            <header class="space-y-1">
                <h1 class="text-3xl font-semibold text-slate-900">"n8n shortlink"</h1>
                <p class="text-sm text-slate-500">
                    "Shorten a URL or an n8n workflow, optionally behind a password."
                </p>
            </header>

            <form id="shortener-form" class="space-y-4" novalidate on:submit=on_submit>
                <div>
                    <textarea
                        id="workflow-input"
                        name="content"
                        rows="6"
                        class="w-full rounded-xl border border-slate-200 bg-slate-50 p-3 font-mono text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                        placeholder="Paste a URL or workflow JSON"
                        prop:value=move || form.with(|form| form.content.clone())
                        on:input=move |event| {
                            form.update(|form| form.set_content(event_target_value(&event)))
                        }
                    ></textarea>
                    <FieldMessage
                        id="error-message-workflow"
                        error=Signal::derive(move || form.with(|form| form.errors.workflow.clone()))
                    />
                </div>

                <div class="space-y-2">
                    <Toggle
                        id="vanity-url-toggle"
                        label="Custom slug"
                        checked=Signal::derive(move || form.with(|form| form.vanity_url_enabled))
                        on_toggle=toggle_vanity_url
                    />
                    <input
                        id="vanity-url-input"
                        name="slug"
                        type="text"
                        class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900"
                        class:hidden=move || !form.with(|form| form.vanity_url_enabled)
                        placeholder="my-workflow"
                        prop:value=move || form.with(|form| form.slug.clone())
                        on:input=move |event| {
                            form.update(|form| form.set_slug(event_target_value(&event)))
                        }
                    />
                    <FieldMessage
                        id="error-message-vanity-url"
                        error=vanity_url_error
                    />
                </div>

                <div class="space-y-2">
                    <Toggle
                        id="password-toggle"
                        label="Password"
                        checked=Signal::derive(move || form.with(|form| form.password_enabled))
                        on_toggle=toggle_password
                    />
                    <input
                        id="password-input"
                        name="password"
                        type="password"
                        autocomplete="new-password"
                        class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900"
                        class:hidden=move || !form.with(|form| form.password_enabled)
                        prop:value=move || form.with(|form| form.password.clone())
                        on:input=move |event| {
                            form.update(|form| form.set_password(event_target_value(&event)))
                        }
                    />
                    <FieldMessage
                        id="error-message-password"
                        error=Signal::derive(move || form.with(|form| form.errors.password.clone()))
                    />
                </div>

                <Button
                    id="shorten-button"
                    button_type="submit"
                    disabled=submit_disabled
                    title=submit_title
                >
                    "Shorten"
                    {move || create_action.pending().get().then(|| view! { <Spinner /> })}
                </Button>
            </form>

            <Modal
                id="success-modal"
                phase=success_phase
                on_backdrop=Callback::new(move |()| close_success())
            >
                <h2 id="success-message" class="text-lg font-semibold text-slate-900">
                    {move || created.with(|view| view.as_ref().map(|view| view.copy.message))}
                </h2>
                <button
                    id="shortlinkText"
                    type="button"
                    class="shortlink mt-4 w-full rounded-lg px-4 py-3 font-mono text-sm"
                    class:copied=move || copied.get()
                    on:click=copy_shortlink
                >
                    {move || {
                        if copied.get() {
                            "Copied to clipboard!".to_string()
                        } else {
                            created.with(|view| {
                                view.as_ref().map(|view| view.url.clone()).unwrap_or_default()
                            })
                        }
                    }}
                </button>
                <p id="success-tip" class="mt-3 text-sm text-slate-500">
                    {move || {
                        created
                            .get()
                            .map(|view| {
                                let tip = view.copy.tip;
                                view! {
                                    {tip.before}
                                    {tip.code.map(|code| view! { <code>{code}</code> })}
                                    {tip.after}
                                }
                            })
                    }}
                </p>
            </Modal>

            <footer class="text-center text-xs text-slate-400">
                {format!("shortlink-web v{PKG_VERSION} ({GIT_COMMIT_HASH})")}
            </footer>
        </main>
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Config("Browser window is unavailable.".to_string()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| AppError::Config(format!("Clipboard write was refused: {err:?}")))
}
