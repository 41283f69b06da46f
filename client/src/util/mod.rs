//! Shared UI utility modules.

pub mod date;
