//! Root route: forwards visitors to the view that fits their session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::guard::{entry_path, replace_history};
use crate::state::session::use_session;

#[component]
pub fn IndexPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.is_ready() {
            navigate(entry_path(session.flags()), replace_history());
        }
    });

    view! { <div class="page-loading">"Loading..."</div> }
}
