//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `leads`, `lead_form`) so components
//! depend on small focused models. Every model here is plain data with
//! transition methods; components wrap them in signals.

pub mod lead_form;
pub mod leads;
pub mod session;
