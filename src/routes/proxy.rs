//! `/api` forwarding to the leads backend.
//!
//! The browser client only ever calls relative `/api/...` paths; this handler
//! replays each call against `LEADS_API_URL` with the same method, path,
//! query, and body, and hands back the backend's status and payload as-is.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers replayed upstream. Cookies, host, and hop-by-hop headers
/// stay behind.
static FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{base}{path}?{q}"),
        _ => format!("{base}{path}"),
    }
}

pub(crate) fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        if let Some(value) = incoming.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api[/*]`: forward to the backend and relay its response.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = upstream_url(&state.config.backend_url, uri.path(), uri.query());

    let upstream = state
        .http
        .request(method.clone(), &target)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let payload = upstream.bytes().await?;
    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), bytes = payload.len(), "proxied");

    let mut response = (status, payload).into_response();
    match content_type {
        Some(ct) => {
            response.headers_mut().insert(CONTENT_TYPE, ct);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
