mod challenge;
mod shortener;

pub(crate) use challenge::ChallengePage;
pub(crate) use shortener::ShortenerPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// `/` is the shortener; any single-segment path is a protected slug, because
/// the backend only serves this bundle there when a password is required.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <p class="p-10 text-center text-slate-500">"Page not found."</p> }>
            <Route path=path!("/") view=ShortenerPage />
            <Route path=path!("/:slug") view=ChallengePage />
        </Routes>
    }
}
