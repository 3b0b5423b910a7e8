use std::sync::Arc;

use super::*;
use crate::net::types::User;
use crate::state::storage::MemoryStorage;

const ANONYMOUS: SessionFlags = SessionFlags { authenticated: false, admin: false };
const STUDENT: SessionFlags = SessionFlags { authenticated: true, admin: false };
const ADMIN: SessionFlags = SessionFlags { authenticated: true, admin: true };

// =============================================================
// evaluate
// =============================================================

#[test]
fn anonymous_is_sent_to_login() {
    assert_eq!(evaluate(ANONYMOUS, false), GuardDecision::RedirectToLogin);
    assert_eq!(evaluate(ANONYMOUS, true), GuardDecision::RedirectToLogin);
}

#[test]
fn student_on_admin_view_is_sent_to_landing() {
    assert_eq!(evaluate(STUDENT, true), GuardDecision::RedirectToLanding);
}

#[test]
fn student_on_student_view_is_granted() {
    assert_eq!(evaluate(STUDENT, false), GuardDecision::Grant);
}

#[test]
fn admin_on_admin_view_is_granted() {
    assert_eq!(evaluate(ADMIN, true), GuardDecision::Grant);
}

#[test]
fn admin_on_plain_protected_view_is_granted() {
    assert_eq!(evaluate(ADMIN, false), GuardDecision::Grant);
}

#[test]
fn admin_flag_without_authentication_is_never_granted() {
    let inconsistent = SessionFlags { authenticated: false, admin: true };
    assert_eq!(evaluate(inconsistent, true), GuardDecision::RedirectToLogin);
}

#[test]
fn redirect_paths() {
    assert_eq!(GuardDecision::Grant.redirect_path(), None);
    assert_eq!(GuardDecision::RedirectToLogin.redirect_path(), Some("/login"));
    assert_eq!(GuardDecision::RedirectToLanding.redirect_path(), Some("/student"));
}

#[test]
fn guard_navigation_replaces_history() {
    assert!(replace_history().replace);
}

// =============================================================
// Landing / entry
// =============================================================

#[test]
fn landing_path_by_role() {
    assert_eq!(landing_path(Role::Admin), "/admin");
    assert_eq!(landing_path(Role::Student), "/student");
}

#[test]
fn entry_path_by_session() {
    assert_eq!(entry_path(ANONYMOUS), "/login");
    assert_eq!(entry_path(STUDENT), "/student");
    assert_eq!(entry_path(ADMIN), "/admin");
}

// =============================================================
// End to end over a real store
// =============================================================

#[test]
fn student_login_then_admin_view_redirects_to_student_landing() {
    let mut store = SessionStore::new(Arc::new(MemoryStorage::new()));
    store
        .login("t1", User { id: "1".into(), email: "s@x.edu".into(), name: "S".into(), role: Role::Student })
        .unwrap();

    assert!(store.is_authenticated());
    assert!(!store.is_admin());
    let decision = evaluate_store(&store, true);
    assert_eq!(decision, GuardDecision::RedirectToLanding);
    assert_eq!(decision.redirect_path(), Some("/student"));
}

#[test]
fn logout_revokes_previously_granted_view() {
    let mut store = SessionStore::new(Arc::new(MemoryStorage::new()));
    store
        .login("t9", User { id: "2".into(), email: "a@x.edu".into(), name: "A".into(), role: Role::Admin })
        .unwrap();
    assert_eq!(evaluate_store(&store, true), GuardDecision::Grant);

    store.logout();
    assert_eq!(evaluate_store(&store, true), GuardDecision::RedirectToLogin);
}
