//! REST API helpers for communicating with the leads backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so request
//! failures end up as inline messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, Lead, LeadDraft, TokenGrant};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiMessage;

#[cfg(any(test, feature = "hydrate"))]
const API_ROOT: &str = "/api";
#[cfg(any(test, feature = "hydrate"))]
const USERS_ENDPOINT: &str = "/api/users";
#[cfg(any(test, feature = "hydrate"))]
const TOKEN_ENDPOINT: &str = "/api/token";
#[cfg(any(test, feature = "hydrate"))]
const LEADS_ENDPOINT: &str = "/api/leads";

#[cfg(any(test, feature = "hydrate"))]
fn lead_endpoint(id: i64) -> String {
    format!("{LEADS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull the `message` field out of a `GET /api` body, whatever its status.
#[cfg(any(test, feature = "hydrate"))]
fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .map(|m| m.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(status_error(resp).await) }
}

/// Fetch the backend banner from `GET /api`.
///
/// The body's `message` is returned whenever it is present, for success and
/// failure statuses alike. Transport failures yield `None`.
pub async fn fetch_api_message() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(API_ROOT)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| log::warn!("GET {API_ROOT} failed: {e}"))
            .ok()?;
        let body = resp.text().await.ok()?;
        message_from_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create an account via `POST /api/users` and receive its first token.
///
/// # Errors
///
/// Returns `ApiError::Status` carrying the backend `detail` (e.g. an already
/// registered email), or a transport/decode error.
pub async fn register(credentials: &Credentials) -> Result<TokenGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(USERS_ENDPOINT)
            .json(credentials)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Exchange email + password for a token via the form-encoded
/// `POST /api/token` endpoint.
///
/// # Errors
///
/// Returns `ApiError::Status` with `Invalid credentials` detail on a bad
/// password, or a transport/decode error.
pub async fn login(email: &str, password: &str) -> Result<TokenGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        form.append("username", email);
        form.append("password", password);
        let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every lead owned by the token's user from `GET /api/leads`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status, or a body
/// that is not a lead array.
pub async fn list_leads(token: &str) -> Result<Vec<Lead>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(LEADS_ENDPOINT)
            .header("Content-Type", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one lead from `GET /api/leads/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status
/// (`404` when the lead is gone).
pub async fn get_lead(token: &str, id: i64) -> Result<Lead, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&lead_endpoint(id))
            .header("Content-Type", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Create a lead via `POST /api/leads`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn create_lead(token: &str, draft: &LeadDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LEADS_ENDPOINT)
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(ApiError::Unavailable)
    }
}

/// Replace a lead's editable fields via `PUT /api/leads/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn update_lead(token: &str, id: i64, draft: &LeadDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&lead_endpoint(id))
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete a lead via `DELETE /api/leads/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn delete_lead(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&lead_endpoint(id))
            .header("Content-Type", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}
