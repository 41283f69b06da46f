//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies their failures, and
//! `types` defines the JSON shapes exchanged with the backend.

pub mod api;
pub mod error;
pub mod types;
