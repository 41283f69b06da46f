use super::*;

fn grant(token: &str) -> TokenGrant {
    serde_json::from_value(serde_json::json!({ "access_token": token, "token_type": "Bearer" })).unwrap()
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_starts_empty() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.token(), None);
}

#[test]
fn sign_in_stores_exactly_the_granted_token() {
    let mut state = SessionState::default();
    state.sign_in(grant("eyJhbGciOi.payload.sig"));
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("eyJhbGciOi.payload.sig"));
}

#[test]
fn sign_in_replaces_previous_token() {
    let mut state = SessionState::default();
    state.sign_in(grant("first"));
    state.sign_in(grant("second"));
    assert_eq!(state.token(), Some("second"));
}

#[test]
fn sign_out_clears_token() {
    let mut state = SessionState::default();
    state.sign_in(grant("t"));
    state.sign_out();
    assert_eq!(state, SessionState::default());
}
