//! Route wrapper that renders its children only for permitted sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision itself lives in `state::guard`; this component waits for the
//! persisted session to load, then either renders the children or issues a
//! history-replacing redirect. Children are never built on a denial, so
//! their data fetches never start.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::guard::{GuardDecision, LOGIN_PATH, evaluate, replace_history};
use crate::state::session::use_session;

/// What the route shows for one evaluation of the session.
#[derive(Debug, PartialEq, Eq)]
enum RouteView<V> {
    /// Nothing yet: the session is still loading, or a move is under way.
    Pending,
    Children(V),
    Redirect(&'static str),
}

/// `children` is only called on [`GuardDecision::Grant`].
///
/// A login redirect is skipped while the location is already the login page,
/// so it cannot overwrite the query the rejection handler navigated with.
fn route_view<V>(
    ready: bool,
    decision: GuardDecision,
    at_login: bool,
    children: impl FnOnce() -> V,
) -> RouteView<V> {
    if !ready {
        return RouteView::Pending;
    }
    match decision.redirect_path() {
        None => RouteView::Children(children()),
        Some(LOGIN_PATH) if at_login => RouteView::Pending,
        Some(path) => RouteView::Redirect(path),
    }
}

#[component]
pub fn ProtectedRoute(
    /// Also require the admin role.
    #[prop(optional)]
    requires_admin: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    move || {
        let at_login = location.pathname.with(|p| p == LOGIN_PATH);
        let decision = evaluate(session.flags(), requires_admin);
        match route_view(session.is_ready(), decision, at_login, || children()) {
            RouteView::Pending => ().into_any(),
            RouteView::Children(view) => view.into_any(),
            RouteView::Redirect(path) => view! { <Redirect path=path options=replace_history()/> }.into_any(),
        }
    }
}
