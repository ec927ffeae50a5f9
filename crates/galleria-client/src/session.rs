//! Typed session state machine
//!
//! The session moves `SignedOut -> SigningIn -> SignedIn`; invalid moves are
//! errors rather than silent corrections. Token persistence is delegated to
//! a [`TokenStore`] so the storage collaborator (browser storage, keychain,
//! file) stays outside this crate.

use std::sync::RwLock;

use galleria_api::{Credentials, User};
use tracing::debug;

use crate::api::AdminApi;
use crate::error::Result;

/// An authenticated session: the opaque bearer token plus the signed-in
/// user's profile, when the backend supplied one.
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub token: String,
    pub user: Option<User>,
}

/// Session lifecycle states
#[derive(Clone, Debug, Default)]
pub enum Session {
    #[default]
    SignedOut,
    SigningIn,
    SignedIn(AuthSession),
}

/// Invalid session transitions
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a sign-in is already in progress")]
    SignInInProgress,
    #[error("already signed in")]
    AlreadySignedIn,
}

/// Persistent storage for the bearer token.
///
/// Implementations are expected to be cheap; they are called once per
/// transition, never per request.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory token store, for tests and short-lived tools.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, token: &str) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.to_string());
    }

    fn clear(&self) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}

/// Owns the session state and keeps the transport token and the persistent
/// store in step with it.
pub struct SessionManager<S: TokenStore> {
    state: Session,
    store: S,
}

impl<S: TokenStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            state: Session::SignedOut,
            store,
        }
    }

    pub fn state(&self) -> &Session {
        &self.state
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, Session::SignedIn(_))
    }

    /// The current session, if signed in.
    pub fn auth(&self) -> Option<&AuthSession> {
        match &self.state {
            Session::SignedIn(auth) => Some(auth),
            _ => None,
        }
    }

    /// `SignedOut -> SigningIn`
    pub fn begin_sign_in(&mut self) -> std::result::Result<(), SessionError> {
        match self.state {
            Session::SignedOut => {
                self.state = Session::SigningIn;
                Ok(())
            }
            Session::SigningIn => Err(SessionError::SignInInProgress),
            Session::SignedIn(_) => Err(SessionError::AlreadySignedIn),
        }
    }

    /// `SigningIn -> SignedIn`, persisting the token.
    pub fn complete_sign_in(&mut self, auth: AuthSession) {
        self.store.save(&auth.token);
        debug!("signed in");
        self.state = Session::SignedIn(auth);
    }

    /// `SigningIn -> SignedOut`
    pub fn fail_sign_in(&mut self) {
        self.state = Session::SignedOut;
    }

    /// Full sign-in round trip against the API. On failure the session
    /// returns to `SignedOut` and the error is surfaced to the caller.
    pub async fn sign_in(&mut self, api: &AdminApi, credentials: &Credentials) -> Result<()> {
        self.begin_sign_in()?;
        match api.login(credentials).await {
            Ok(auth) => {
                self.complete_sign_in(auth);
                Ok(())
            }
            Err(err) => {
                self.fail_sign_in();
                Err(err)
            }
        }
    }

    /// Resume a persisted session. The profile is unknown until the backend
    /// supplies one; the token stays opaque either way.
    pub fn restore(&mut self, api: &AdminApi) -> bool {
        if !matches!(self.state, Session::SignedOut) {
            return false;
        }
        match self.store.load() {
            Some(token) => {
                api.set_token(&token);
                debug!("session restored from stored token");
                self.state = Session::SignedIn(AuthSession { token, user: None });
                true
            }
            None => false,
        }
    }

    /// Drop the session, the transport token, and the persisted token.
    /// Also the right response to an `AuthRequired` error.
    pub fn sign_out(&mut self, api: &AdminApi) {
        api.clear_token();
        self.store.clear();
        self.state = Session::SignedOut;
    }
}
