use super::*;

#[test]
fn rejection_while_signed_in_logs_out_with_configured_redirect() {
    assert_eq!(
        rejection_action(true, RejectionRedirect::FullReload),
        RejectionAction::LogoutAndRedirect(RejectionRedirect::FullReload)
    );
    assert_eq!(
        rejection_action(true, RejectionRedirect::InApp),
        RejectionAction::LogoutAndRedirect(RejectionRedirect::InApp)
    );
}

#[test]
fn rejection_after_logout_is_ignored() {
    assert_eq!(rejection_action(false, RejectionRedirect::FullReload), RejectionAction::Ignore);
    assert_eq!(rejection_action(false, RejectionRedirect::InApp), RejectionAction::Ignore);
}

// =============================================================
// AuthRejectionHandler::check
// =============================================================

#[test]
fn check_reports_only_unauthorized_and_passes_results_through() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let owner = Owner::new();
    owner.with(|| {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let handler = AuthRejectionHandler::new(Callback::new(move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(handler.check(Ok::<_, ApiError>(7)), Ok(7));
        assert_eq!(
            handler.check::<()>(Err(ApiError::Network("offline".into()))),
            Err(ApiError::Network("offline".into()))
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        assert_eq!(handler.check::<()>(Err(ApiError::Unauthorized)), Err(ApiError::Unauthorized));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    });
}

// =============================================================
// handle_rejection over a real session
// =============================================================

mod session_flow {
    use std::cell::RefCell;
    use std::sync::Arc;

    use super::*;
    use crate::net::types::{Role, User};
    use crate::state::storage::{MemoryStorage, SessionStorage, TOKEN_KEY, USER_KEY};

    fn signed_in(storage: &Arc<MemoryStorage>) -> SessionContext {
        let session = SessionContext::new(Arc::clone(storage) as Arc<dyn SessionStorage>);
        session
            .login("t1", User { id: "1".into(), email: "s@x.edu".into(), name: "S".into(), role: Role::Student })
            .unwrap();
        session
    }

    #[test]
    fn rejection_logs_out_clears_storage_and_redirects_once() {
        Owner::new().with(|| {
            let storage = Arc::new(MemoryStorage::new());
            let session = signed_in(&storage);
            assert!(storage.get(TOKEN_KEY).is_some());

            let redirects = RefCell::new(Vec::new());
            let action = handle_rejection(session, RejectionRedirect::InApp, |target| {
                redirects.borrow_mut().push((target, session.is_authenticated_untracked()));
            });

            assert_eq!(action, RejectionAction::LogoutAndRedirect(RejectionRedirect::InApp));
            // The redirect starts while the session is still present.
            assert_eq!(*redirects.borrow(), vec![(RejectionRedirect::InApp, true)]);
            assert!(!session.is_authenticated_untracked());
            assert_eq!(storage.get(TOKEN_KEY), None);
            assert_eq!(storage.get(USER_KEY), None);

            let again = handle_rejection(session, RejectionRedirect::InApp, |target| {
                redirects.borrow_mut().push((target, session.is_authenticated_untracked()));
            });
            assert_eq!(again, RejectionAction::Ignore);
            assert_eq!(redirects.borrow().len(), 1);
        });
    }

    #[test]
    fn rejection_uses_configured_full_reload() {
        Owner::new().with(|| {
            let storage = Arc::new(MemoryStorage::new());
            let session = signed_in(&storage);

            let mut target = None;
            handle_rejection(session, RejectionRedirect::FullReload, |t| target = Some(t));

            assert_eq!(target, Some(RejectionRedirect::FullReload));
            assert!(!session.is_authenticated_untracked());
        });
    }

    #[test]
    fn rejection_without_session_does_nothing() {
        Owner::new().with(|| {
            let session = SessionContext::new(Arc::new(MemoryStorage::new()));
            let mut redirected = false;
            let action = handle_rejection(session, RejectionRedirect::InApp, |_| redirected = true);
            assert_eq!(action, RejectionAction::Ignore);
            assert!(!redirected);
        });
    }
}
