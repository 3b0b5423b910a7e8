//! Dashboard header with identity badge and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::guard::{LOGIN_PATH, replace_history};
use crate::state::session::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let name = move || session.user().map(|u| u.name).unwrap_or_default();
    let role_label = move || session.user().map(|u| u.role.label()).unwrap_or_default();

    let on_logout = move |_| {
        // Leave first; the route guard holds its own redirect once at the login page.
        navigate(LOGIN_PATH, replace_history());
        session.logout();
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <span class="app-header__logo">"SC"</span>
                <span class="app-header__title">"Smart Campus"</span>
            </div>
            <div class="app-header__user">
                <span class="app-header__name">{name}</span>
                <span class="app-header__role" class:app-header__role--admin=move || session.is_admin()>
                    {role_label}
                </span>
                <button class="btn btn--outline" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
