//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is a plain value over an injected [`SessionStorage`], so
//! tests can build as many isolated instances as they like. The app wraps one
//! in [`SessionContext`] and hands it down through Leptos context. The token
//! and identity live in a single `Option<Session>`, which makes a half-set
//! session unrepresentable in memory.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use super::storage::{SessionStorage, TOKEN_KEY, USER_KEY};
use crate::net::types::{Role, User};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// `login` was handed an empty or whitespace-only token.
    #[error("credential must not be empty")]
    EmptyCredential,

    /// The identity could not be serialized for persistence.
    #[error("identity could not be encoded: {0}")]
    Encode(String),
}

/// An authenticated credential together with the identity it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Derived, read-only view of the session used by access decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub authenticated: bool,
    pub admin: bool,
}

/// Single source of truth for who is logged in.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    session: Option<Session>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("session", &self.session).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// An empty store over `storage`. Persisted state is not read.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage, session: None }
    }

    /// Rebuild the store from persisted state.
    ///
    /// A missing, partial, or unparsable persisted session yields a logged-out
    /// store; anything left behind in storage is cleared.
    pub fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let user = storage.get(USER_KEY);

        let session = match (token, user) {
            (None, None) => None,
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    leptos::logging::warn!("discarding corrupt persisted session: {e}");
                    clear_persisted(storage.as_ref());
                    None
                }
            },
            _ => {
                leptos::logging::warn!("discarding partial persisted session");
                clear_persisted(storage.as_ref());
                None
            }
        };

        Self { storage, session }
    }

    /// Install a credential and identity and persist both.
    ///
    /// Persistence is best-effort: a storage failure is logged and the
    /// in-memory session is still updated.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCredential`] for an empty token. State is
    /// left untouched on error.
    pub fn login(&mut self, token: impl Into<String>, user: User) -> Result<(), SessionError> {
        let token = token.into();
        check_token(&token)?;
        let encoded = serde_json::to_string(&user).map_err(|e| SessionError::Encode(e.to_string()))?;

        let persisted = self
            .storage
            .set(TOKEN_KEY, &token)
            .and_then(|()| self.storage.set(USER_KEY, &encoded));
        if let Err(e) = persisted {
            leptos::logging::warn!("session not persisted: {e}");
        }

        self.session = Some(Session { token, user });
        Ok(())
    }

    /// Drop the session from memory and storage. Safe to call repeatedly.
    pub fn logout(&mut self) {
        self.session = None;
        clear_persisted(self.storage.as_ref());
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn flags(&self) -> SessionFlags {
        SessionFlags { authenticated: self.is_authenticated(), admin: self.is_admin() }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub(crate) fn storage(&self) -> Arc<dyn SessionStorage> {
        Arc::clone(&self.storage)
    }
}

fn check_token(token: &str) -> Result<(), SessionError> {
    if token.trim().is_empty() { Err(SessionError::EmptyCredential) } else { Ok(()) }
}

fn clear_persisted(storage: &dyn SessionStorage) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = storage.remove(key) {
            leptos::logging::warn!("failed to clear persisted {key}: {e}");
        }
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Reactive handle to the app's [`SessionStore`], provided at the root.
///
/// Only `login`, `logout` and `restore` mutate the store. `ready` flips once
/// the persisted session has been read in the browser; guards hold off until
/// then so a server render never redirects a user who is actually signed in.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore>,
    ready: RwSignal<bool>,
}

impl SessionContext {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { store: RwSignal::new(SessionStore::new(storage)), ready: RwSignal::new(false) }
    }

    /// Load the persisted session. Runs once, on the client.
    pub fn restore(&self) {
        let storage = self.store.with_untracked(SessionStore::storage);
        self.store.set(SessionStore::restore(storage));
        self.ready.set(true);
    }

    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub fn login(&self, token: impl Into<String>, user: User) -> Result<(), SessionError> {
        // Rejected credentials must not wake subscribers.
        let token = token.into();
        check_token(&token)?;
        let mut outcome = Ok(());
        self.store.update(|s| outcome = s.login(token, user));
        outcome
    }

    pub fn logout(&self) {
        self.store.update(SessionStore::logout);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.store.with(SessionStore::is_admin)
    }

    pub fn flags(&self) -> SessionFlags {
        self.store.with(SessionStore::flags)
    }

    pub fn user(&self) -> Option<User> {
        self.store.with(|s| s.user().cloned())
    }

    pub fn user_untracked(&self) -> Option<User> {
        self.store.with_untracked(|s| s.user().cloned())
    }

    /// Current token without subscribing the caller to session changes.
    pub fn token_untracked(&self) -> Option<String> {
        self.store.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.store.with_untracked(SessionStore::is_authenticated)
    }
}

/// The session provided by the app root.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
