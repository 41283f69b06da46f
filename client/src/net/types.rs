//! JSON shapes exchanged with the leads backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's snake_case payloads so serde needs no
//! renames. Timestamps stay as strings on the wire and are only parsed for
//! display (`util::date`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A lead record as returned by `GET /api/leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    pub email: String,
    #[serde(default)]
    pub note: String,
    /// ISO-like timestamp, with or without an offset.
    pub date_last_updated: String,
}

/// Editable lead fields; the body of both create and update requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub note: String,
}

impl From<&Lead> for LeadDraft {
    fn from(lead: &Lead) -> Self {
        Self {
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            company: lead.company.clone(),
            email: lead.email.clone(),
            note: lead.note.clone(),
        }
    }
}

/// Registration body for `POST /api/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Access token issued by a successful register or login call.
///
/// Only obtainable by deserializing a backend response, which keeps
/// session writes tied to the auth request paths.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
}

impl TokenGrant {
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub(crate) fn into_access_token(self) -> String {
        self.access_token
    }
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Body of `GET /api`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Error body emitted by the backend on non-success statuses.
///
/// `detail` is a plain string for handled errors and a list of
/// `{ "msg": ... }` entries for request validation failures.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human-readable detail, if the body carries one.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .map(str::to_owned),
            _ => None,
        }
    }
}
