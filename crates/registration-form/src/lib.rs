//! Registration intake application.
//!
//! Wires the pure validation core, the spreadsheet client, and the local
//! backup store into a submission flow:
//! - Re-validate every field at submit time, whatever live validation ran
//! - Post the record to the endpoint (delivery is never confirmed)
//! - Keep a bounded local copy either way
//! - Report the outcome through a single status slot

pub mod config;
pub mod error;
pub mod form;
pub mod status;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use form::{FormController, FormState, SubmitState};
pub use status::{MessageClass, StatusMessage, StatusSlot};
