//! Validation errors.

use crate::types::Field;
use thiserror::Error;

/// The set of fields that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", self.summary())]
pub struct ValidationErrors {
    pub fields: Vec<Field>,
}

impl ValidationErrors {
    /// `(field, message)` pairs for display.
    pub fn messages(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.fields.iter().map(|f| (*f, f.error_message()))
    }

    fn summary(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.wire_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
