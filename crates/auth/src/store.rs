//! Observable authentication state container.

use std::sync::{Mutex, MutexGuard, PoisonError, mpsc};

use serde::{Deserialize, Serialize};

use mms_directory::User;

use crate::subscription::Subscription;

/// Snapshot of the client's authentication status.
///
/// `Default` is the state of a freshly created store: nobody signed in, not
/// authenticated, startup check not finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_initialized: bool,
}

/// Single source of truth for the session's authentication status.
///
/// The application root creates one store and hands it (by reference or
/// `Arc`) to whatever needs it; there is no process-wide instance.
///
/// - Every setter is total and performs no validation.
/// - `user` and `is_authenticated` are independent; callers keep them
///   consistent (or use [`AuthStore::sign_in`] / [`AuthStore::sign_out`]).
/// - Each mutation publishes the full new state to every subscriber before
///   the setter returns.
#[derive(Debug, Default)]
pub struct AuthStore {
    state: Mutex<AuthState>,
    subscribers: Mutex<Vec<mpsc::Sender<AuthState>>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored user (`None` clears it).
    pub fn set_user(&self, user: Option<User>) {
        self.update(|state| state.user = user);
    }

    /// Replace the authentication flag. The user is left untouched.
    pub fn set_is_authenticated(&self, is_authenticated: bool) {
        self.update(|state| state.is_authenticated = is_authenticated);
    }

    /// Replace the initialization flag. Meant to be set once, to `true`,
    /// after the startup session check; repeated calls are allowed.
    pub fn set_is_initialized(&self, is_initialized: bool) {
        self.update(|state| state.is_initialized = is_initialized);
    }

    /// Store `user` and mark the session authenticated.
    pub fn sign_in(&self, user: User) {
        self.set_user(Some(user));
        self.set_is_authenticated(true);
    }

    /// Clear the user and mark the session unauthenticated.
    pub fn sign_out(&self) {
        self.set_user(None);
        self.set_is_authenticated(false);
    }

    pub fn mark_initialized(&self) {
        self.set_is_initialized(true);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.lock_state().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.lock_state().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock_state().is_authenticated
    }

    pub fn is_initialized(&self) -> bool {
        self.lock_state().is_initialized
    }

    /// Receive every state published from now on.
    pub fn subscribe(&self) -> Subscription<AuthState> {
        let (tx, rx) = mpsc::channel();
        self.lock_subscribers().push(tx);
        Subscription::new(rx)
    }

    /// Number of registered subscribers (dropped ones are counted until the
    /// next mutation prunes them).
    pub fn subscriber_count(&self) -> usize {
        self.lock_subscribers().len()
    }

    fn update(&self, mutate: impl FnOnce(&mut AuthState)) {
        // Publishing under the state lock keeps delivery order equal to
        // mutation order.
        let mut state = self.lock_state();
        mutate(&mut *state);

        tracing::debug!(
            user_id = state.user.as_ref().map(|u| u.id.as_str()),
            is_authenticated = state.is_authenticated,
            is_initialized = state.is_initialized,
            "auth state updated"
        );

        let mut subs = self.lock_subscribers();
        let before = subs.len();
        subs.retain(|tx| tx.send(state.clone()).is_ok());

        let dropped = before - subs.len();
        if dropped > 0 {
            tracing::trace!(dropped, "pruned disconnected auth subscribers");
        }
    }

    // Setters are total: a panic elsewhere never blocks later updates.
    fn lock_state(&self) -> MutexGuard<'_, AuthState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<mpsc::Sender<AuthState>>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
