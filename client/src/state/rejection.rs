//! Top-level handling of API authorization rejections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Data-fetch code never clears the session itself. It passes each API
//! result through [`AuthRejectionHandler::check`]; an `Unauthorized` outcome
//! is forwarded to the single handler installed by the app root, which logs
//! the user out and sends them to the login page.

#[cfg(test)]
#[path = "rejection_test.rs"]
mod rejection_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::guard::{SESSION_EXPIRED_PATH, replace_history};
use super::session::SessionContext;
use crate::config::RejectionRedirect;
use crate::net::api::ApiError;

/// Reports authorization rejections to the app root.
#[derive(Clone, Copy)]
pub struct AuthRejectionHandler {
    on_reject: Callback<()>,
}

impl AuthRejectionHandler {
    pub fn new(on_reject: Callback<()>) -> Self {
        Self { on_reject }
    }

    /// Pass `result` through unchanged, notifying the root on `Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns `result`'s error unchanged.
    pub fn check<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if matches!(result, Err(ApiError::Unauthorized)) {
            self.on_reject.run(());
        }
        result
    }
}

/// What the root does once a rejection has been reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionAction {
    /// The session is already gone; a concurrent rejection got here first.
    Ignore,
    /// Log out, then leave through the configured redirect.
    LogoutAndRedirect(RejectionRedirect),
}

pub fn rejection_action(authenticated: bool, mode: RejectionRedirect) -> RejectionAction {
    if authenticated {
        RejectionAction::LogoutAndRedirect(mode)
    } else {
        RejectionAction::Ignore
    }
}

/// Act on one reported rejection.
///
/// `redirect` runs before the session is cleared, so the move to the login
/// page is already under way when route guards observe the logout.
pub(crate) fn handle_rejection(
    session: SessionContext,
    mode: RejectionRedirect,
    redirect: impl FnOnce(RejectionRedirect),
) -> RejectionAction {
    let action = rejection_action(session.is_authenticated_untracked(), mode);
    if let RejectionAction::LogoutAndRedirect(target) = action {
        leptos::logging::warn!("API rejected session token; signing out");
        redirect(target);
        session.logout();
    }
    action
}

/// Install the rejection handler. Must be called inside the `<Router>`.
pub fn provide_rejection_handler(session: SessionContext, mode: RejectionRedirect) {
    let navigate = use_navigate();
    let on_reject = Callback::new(move |()| {
        handle_rejection(session, mode, |target| match target {
            RejectionRedirect::InApp => navigate(SESSION_EXPIRED_PATH, replace_history()),
            RejectionRedirect::FullReload => hard_redirect(SESSION_EXPIRED_PATH),
        });
    });
    provide_context(AuthRejectionHandler::new(on_reject));
}

/// The handler installed by the app root.
///
/// # Panics
///
/// Panics when called outside the `App` router.
pub fn use_rejection_handler() -> AuthRejectionHandler {
    expect_context::<AuthRejectionHandler>()
}

fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().replace(path) {
                leptos::logging::warn!("redirect to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
