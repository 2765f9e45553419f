//! Mounted modal driven by a [`ModalPhase`] signal. The element is never
//! removed from the DOM; `display` and the `show` class follow the phase.

use crate::app_lib::ModalPhase;
use leptos::{ev, html, prelude::*};
use leptos_dom::helpers::request_animation_frame;

#[component]
pub fn Modal(
    id: &'static str,
    phase: RwSignal<ModalPhase>,
    /// Called for clicks on the backdrop itself, not on the modal body.
    #[prop(optional, into)]
    on_backdrop: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let backdrop = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if phase.get() == ModalPhase::Opening {
            request_animation_frame(move || {
                // Reading layout commits `display: flex` before `show` is added.
                if let Some(element) = backdrop.get_untracked() {
                    let _ = element.offset_width();
                }
                phase.update(|phase| *phase = phase.frame_elapsed());
            });
        }
    });

    // Transitions of children bubble up; only the backdrop's own fade counts.
    let finish_close = move |event: ev::TransitionEvent| {
        if event.target() == event.current_target() {
            phase.update(|phase| *phase = phase.transition_finished());
        }
    };

    view! {
        <div
            id=id
            node_ref=backdrop
            class="modal"
            class:show=move || phase.get().is_visible()
            style:display=move || phase.get().display_style()
            on:transitionend=finish_close
            on:transitioncancel=finish_close
            on:click=move |event: ev::MouseEvent| {
                if event.target() == event.current_target() {
                    if let Some(on_backdrop) = on_backdrop {
                        on_backdrop.run(());
                    }
                }
            }
        >
            <div class="modal-content">{children()}</div>
        </div>
    }
}
