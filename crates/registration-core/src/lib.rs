//! Core registration types and validation.
//!
//! Pure logic only: the record type, the five field validators, and the
//! phone normalizer. No I/O, no rendering.

mod error;
mod phone;
mod types;
mod validate;

pub use error::ValidationErrors;
pub use phone::normalize_phone;
pub use types::{Field, FormInput, Registration, PROGRAM_OPTIONS};
pub use validate::*;
