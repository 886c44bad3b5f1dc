//! Client for the spreadsheet-backed registration endpoint.
//!
//! The endpoint is an opaque Google Apps Script URL: it takes a
//! multipart POST and its response is not to be trusted, so the best
//! outcome this client reports is "sent, delivery unconfirmed".

mod client;
mod error;

pub use client::{Delivery, SheetsClient};
pub use error::SheetsError;
