//! Login page: email + password exchange, plus demo sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::{Role, User};
use crate::state::demo::{DEMO_TOKEN, demo_user};
use crate::state::guard::{landing_path, replace_history};
use crate::state::session::use_session;
use crate::state::ui::{Notice, UiState};

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "Could not reach the campus server. Please try again.".to_owned(),
        other => other.to_string(),
    }
}

fn welcome_notice(user: &User, demo: bool) -> Notice {
    if demo {
        Notice::success("Demo Mode", format!("Logged in as {}", user.role.label()))
    } else {
        Notice::success("Welcome!", format!("Logged in as {}", user.name))
    }
}

fn is_expired_reason(reason: Option<&str>) -> bool {
    reason == Some("expired")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let config = expect_context::<crate::config::ClientConfig>();

    let expired = move || query.with(|q| is_expired_reason(q.get("reason").as_deref()));

    // Signed-in visitors (including right after a successful login) go to their landing view.
    Effect::new(move || {
        if !session.is_ready() {
            return;
        }
        if let Some(user) = session.user() {
            navigate(landing_path(user.role), replace_history());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = crate::net::api::ApiClient::new(&config, None);
            leptos::task::spawn_local(async move {
                match client.login(&email_value, &password_value).await {
                    Ok(resp) => {
                        let notice = welcome_notice(&resp.user, false);
                        match session.login(resp.token, resp.user) {
                            Ok(()) => ui.update(|u| u.notice = Some(notice)),
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(Some(login_failure_message(&e)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    let demo_login = move |role: Role| {
        let user = demo_user(role);
        let notice = welcome_notice(&user, true);
        match session.login(DEMO_TOKEN, user) {
            Ok(()) => ui.update(|u| u.notice = Some(notice)),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__logo">"SC"</div>
                <h1>"Smart Campus"</h1>
                <p class="login-card__subtitle">"Sign in to access your dashboard"</p>

                <Show when=expired>
                    <p class="login-message login-message--warning">
                        "Your session has expired. Please sign in again."
                    </p>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <label class="form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="login-divider">
                    <span>"Or try demo"</span>
                </div>
                <div class="login-demo">
                    <button class="btn btn--outline" type="button" on:click=move |_| demo_login(Role::Student)>
                        "Demo Student"
                    </button>
                    <button class="btn btn--outline" type="button" on:click=move |_| demo_login(Role::Admin)>
                        "Demo Admin"
                    </button>
                </div>
                <p class="login-card__hint">"Use demo buttons to explore the app without a backend"</p>
            </div>
        </div>
    }
}
