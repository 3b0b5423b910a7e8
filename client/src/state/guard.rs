//! Access decisions for protected routes.
//!
//! The guard is a pure function of [`SessionFlags`]; `ProtectedRoute` turns
//! its answer into a history-replacing redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos_router::NavigateOptions;

use super::session::{SessionFlags, SessionStore};
use crate::net::types::Role;

pub const LOGIN_PATH: &str = "/login";
/// Login path carrying the session-expired marker.
pub const SESSION_EXPIRED_PATH: &str = "/login?reason=expired";
pub const STUDENT_PATH: &str = "/student";
pub const ADMIN_PATH: &str = "/admin";

/// Options for every guard- or session-driven move: the page being left is
/// dropped from history so Back cannot return to it.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Outcome of evaluating a navigation to a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Grant,
    /// No session: go to the login entry point.
    RedirectToLogin,
    /// Signed in without the required role: go to the default landing view.
    RedirectToLanding,
}

impl GuardDecision {
    /// Where to send the user, or `None` when access is granted.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Grant => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToLanding => Some(STUDENT_PATH),
        }
    }
}

/// Decide whether a protected view may render.
pub fn evaluate(flags: SessionFlags, requires_admin: bool) -> GuardDecision {
    if !flags.authenticated {
        GuardDecision::RedirectToLogin
    } else if requires_admin && !flags.admin {
        GuardDecision::RedirectToLanding
    } else {
        GuardDecision::Grant
    }
}

pub fn evaluate_store(store: &SessionStore, requires_admin: bool) -> GuardDecision {
    evaluate(store.flags(), requires_admin)
}

/// Landing view for a signed-in role.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_PATH,
        Role::Student => STUDENT_PATH,
    }
}

/// Where the site root should send the current visitor.
pub fn entry_path(flags: SessionFlags) -> &'static str {
    match (flags.authenticated, flags.admin) {
        (false, _) => LOGIN_PATH,
        (true, true) => ADMIN_PATH,
        (true, false) => STUDENT_PATH,
    }
}
