//! Registration record and form input types.

use crate::error::ValidationErrors;
use crate::phone::normalize_phone;
use crate::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of course programs offered on the form.
pub const PROGRAM_OPTIONS: &[&str] = &[
    "Content Creator",
    "Video Editing",
    "Digital Marketing",
    "Live Streaming",
];

/// The five registration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Program,
    NationalId,
    Address,
    Phone,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Program,
        Field::NationalId,
        Field::Address,
        Field::Phone,
    ];

    /// Field name as it appears on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Name => "nama",
            Field::Program => "program",
            Field::NationalId => "nik",
            Field::Address => "alamat",
            Field::Phone => "whatsapp",
        }
    }

    /// Fixed user-facing message shown when this field fails validation.
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Name => "Name must be 3-50 characters",
            Field::Program => "Choose a course program",
            Field::NationalId => "National ID must be 16 digits",
            Field::Address => "Address must be 10-200 characters",
            Field::Phone => "WhatsApp number is not valid",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub program: String,
    pub national_id: String,
    pub address: String,
    pub phone: String,
}

impl FormInput {
    /// Get the raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Program => &self.program,
            Field::NationalId => &self.national_id,
            Field::Address => &self.address,
            Field::Phone => &self.phone,
        }
    }

    /// Set the raw value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Program => self.program = value,
            Field::NationalId => self.national_id = value,
            Field::Address => self.address = value,
            Field::Phone => self.phone = value,
        }
    }

    /// Check a single field against its validator (input is trimmed first).
    pub fn check(&self, field: Field) -> bool {
        let value = self.get(field).trim();
        match field {
            Field::Name => validate::valid_name(value),
            Field::Program => validate::valid_program(value),
            Field::NationalId => validate::valid_national_id(value),
            Field::Address => validate::valid_address(value),
            Field::Phone => validate::valid_phone(value),
        }
    }

    /// Validate every field and build the registration record.
    ///
    /// This is the only way a [`Registration`] is constructed: all five
    /// fields must pass, otherwise the full set of failing fields is
    /// returned and no record exists.
    pub fn validate(&self) -> Result<Registration, ValidationErrors> {
        let failed: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| !self.check(*f))
            .collect();

        if !failed.is_empty() {
            return Err(ValidationErrors { fields: failed });
        }

        Ok(Registration {
            submitted_at: Utc::now(),
            name: self.name.trim().to_string(),
            program: self.program.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: normalize_phone(self.phone.trim()),
        })
    }
}

/// One validated registration submission.
///
/// Field names on the wire (and in local JSON) follow the endpoint's
/// spreadsheet columns: `timestamp, nama, program, nik, alamat, whatsapp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    #[serde(rename = "timestamp")]
    pub submitted_at: DateTime<Utc>,
    #[serde(rename = "nama")]
    pub name: String,
    pub program: String,
    #[serde(rename = "nik")]
    pub national_id: String,
    #[serde(rename = "alamat")]
    pub address: String,
    #[serde(rename = "whatsapp")]
    pub phone: String,
}
