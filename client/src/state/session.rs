//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_session` runs once in the root component. It places a read-only
//! `Session` handle in context for every view and returns the only
//! `SessionWriter`, which the root hands to the auth forms and the logout
//! button. Writing a token requires a `TokenGrant`, and only the register and
//! login requests produce one.
//!
//! The token lives in memory only; a reload starts signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::TokenGrant;

/// Current session token, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, grant: TokenGrant) {
        self.token = Some(grant.into_access_token());
    }

    pub fn sign_out(&mut self) {
        self.token = None;
    }
}

/// Read handle provided through context.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: ReadSignal<SessionState>,
}

impl Session {
    /// Tracked read of the token.
    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token().map(str::to_owned))
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }
}

/// Write handle. Not in context; passed explicitly to auth views.
#[derive(Clone, Copy, Debug)]
pub struct SessionWriter {
    set_state: WriteSignal<SessionState>,
}

impl SessionWriter {
    pub fn sign_in(&self, grant: TokenGrant) {
        self.set_state.update(|s| s.sign_in(grant));
    }

    pub fn sign_out(&self) {
        self.set_state.update(SessionState::sign_out);
    }
}

/// Create the session for this application instance and provide its read
/// handle to all descendants.
pub fn provide_session() -> SessionWriter {
    let (state, set_state) = signal(SessionState::default());
    provide_context(Session { state });
    SessionWriter { set_state }
}

/// Read handle installed by `provide_session`.
///
/// # Panics
///
/// Panics if called outside the tree rooted at `App`.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
