//! Draft state for the lead create/update dialog.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use crate::net::types::{Lead, LeadDraft};

pub const REQUIRED_FIELDS_MESSAGE: &str = "First name, last name and email are required";
pub const CREATE_FAILED_MESSAGE: &str = "Something went wrong when creating lead";
pub const UPDATE_FAILED_MESSAGE: &str = "Something went wrong when updating lead";
pub const PREFILL_FAILED_MESSAGE: &str = "Could not get lead";

/// Which request a save issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Update(i64),
}

impl ModalMode {
    pub fn from_id(id: Option<i64>) -> Self {
        id.map_or(Self::Create, Self::Update)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Create Lead",
            Self::Update(_) => "Update Lead",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update(_) => "Update",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Create => CREATE_FAILED_MESSAGE,
            Self::Update(_) => UPDATE_FAILED_MESSAGE,
        }
    }
}

/// Editable inputs, in display order via `LeadField::ALL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FirstName,
    LastName,
    Company,
    Email,
    Note,
}

impl LeadField {
    pub const ALL: [Self; 5] = [Self::FirstName, Self::LastName, Self::Company, Self::Email, Self::Note];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Company => "Company",
            Self::Email => "Email",
            Self::Note => "Note",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub note: String,
}

impl LeadForm {
    pub fn from_lead(lead: &Lead) -> Self {
        let draft = LeadDraft::from(lead);
        Self {
            first_name: draft.first_name,
            last_name: draft.last_name,
            company: draft.company,
            email: draft.email,
            note: draft.note,
        }
    }

    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Company => &self.company,
            LeadField::Email => &self.email,
            LeadField::Note => &self.note,
        }
    }

    pub fn set_field(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::FirstName => &mut self.first_name,
            LeadField::LastName => &mut self.last_name,
            LeadField::Company => &mut self.company,
            LeadField::Email => &mut self.email,
            LeadField::Note => &mut self.note,
        };
        *slot = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trimmed request body, or the fixed message when a required field is
    /// blank.
    pub fn validate(&self) -> Result<LeadDraft, &'static str> {
        let draft = LeadDraft {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            company: self.company.trim().to_owned(),
            email: self.email.trim().to_owned(),
            note: self.note.trim().to_owned(),
        };
        if draft.first_name.is_empty() || draft.last_name.is_empty() || draft.email.is_empty() {
            return Err(REQUIRED_FIELDS_MESSAGE);
        }
        Ok(draft)
    }
}

/// Open/close counter for the dialog. Async work captures a ticket when it
/// starts and only touches the dialog if the ticket is still current when it
/// finishes; every open, close, or target change advances the counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalEpoch {
    current: u64,
}

/// Snapshot of a `ModalEpoch` taken when a request was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochTicket(u64);

impl ModalEpoch {
    pub fn advance(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn ticket(&self) -> EpochTicket {
        EpochTicket(self.current)
    }

    pub fn is_current(&self, ticket: EpochTicket) -> bool {
        self.current == ticket.0
    }
}
