//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session through context and own their form drafts
//! locally. Only `register_form`, `login_form` and `header` receive the
//! session write handle.

pub mod error_message;
pub mod header;
pub mod lead_modal;
pub mod leads_table;
pub mod login_form;
pub mod register_form;
