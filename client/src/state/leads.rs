//! Leads table state.
//!
//! DESIGN
//! ======
//! The displayed list is always the latest successful fetch. Mutations never
//! patch it locally; they mark the list stale, and a single fetch-on-stale
//! effect in the table component consumes that flag through `begin_fetch`.
//! A mutation landing while a fetch is in flight re-marks the list stale, so
//! the follow-up fetch runs once the current one settles.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use crate::net::types::Lead;
use crate::util::date::format_last_updated;

pub const LIST_FAILED_MESSAGE: &str = "Something went wrong";
pub const DELETE_FAILED_MESSAGE: &str = "Failed: delete";

/// Visibility and target of the create/update dialog.
/// `id == None` means create mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub active: bool,
    pub id: Option<i64>,
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LeadRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub note: String,
    pub last_updated: String,
}

impl From<&Lead> for LeadRow {
    fn from(lead: &Lead) -> Self {
        Self {
            id: lead.id,
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            company: lead.company.clone(),
            email: lead.email.clone(),
            note: lead.note.clone(),
            last_updated: format_last_updated(&lead.date_last_updated),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadsTableState {
    loaded: bool,
    leads: Option<Vec<Lead>>,
    modal: ModalState,
    error: String,
    stale: bool,
    in_flight: bool,
}

impl Default for LeadsTableState {
    fn default() -> Self {
        // Stale from the start: mounting the table triggers the first fetch.
        Self { loaded: false, leads: None, modal: ModalState::default(), error: String::new(), stale: true, in_flight: false }
    }
}

impl LeadsTableState {
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn leads(&self) -> Option<&[Lead]> {
        self.leads.as_deref()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// A fetch should start now.
    pub fn needs_fetch(&self) -> bool {
        self.stale && !self.in_flight
    }

    /// The rendered list reflects every mutation issued so far.
    pub fn is_current(&self) -> bool {
        self.loaded && !self.stale && !self.in_flight
    }

    /// Claim the pending invalidation. Returns `true` when the caller must
    /// issue exactly one list request.
    pub fn begin_fetch(&mut self) -> bool {
        if !self.needs_fetch() {
            return false;
        }
        self.stale = false;
        self.in_flight = true;
        true
    }

    pub fn fetch_succeeded(&mut self, leads: Vec<Lead>) {
        self.in_flight = false;
        self.leads = Some(leads);
        self.loaded = true;
    }

    /// Drop the table entirely so no stale rows stay on screen.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.leads = None;
        self.loaded = false;
        self.error = message.into();
    }

    pub fn open_create(&mut self) {
        self.error.clear();
        self.modal = ModalState { active: true, id: None };
    }

    pub fn open_update(&mut self, id: i64) {
        self.error.clear();
        self.modal = ModalState { active: true, id: Some(id) };
    }

    /// Shared close path for cancel and successful save. Always invalidates
    /// the list, whether or not anything changed.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::default();
        self.stale = true;
    }

    pub fn delete_succeeded(&mut self) {
        self.stale = true;
    }

    pub fn delete_failed(&mut self) {
        self.error = DELETE_FAILED_MESSAGE.to_owned();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    /// Rows for the current snapshot; empty until a fetch has succeeded.
    pub fn rows(&self) -> Vec<LeadRow> {
        match (&self.leads, self.loaded) {
            (Some(leads), true) => leads.iter().map(LeadRow::from).collect(),
            _ => Vec::new(),
        }
    }
}
