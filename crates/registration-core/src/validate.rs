//! Pure field validators.
//!
//! Each predicate takes trimmed input and returns a bool; mapping a
//! failure to a user-facing message is the caller's job.

use crate::types::PROGRAM_OPTIONS;

/// Name: 3-50 characters.
pub fn valid_name(name: &str) -> bool {
    let len = name.chars().count();
    (3..=50).contains(&len)
}

/// Program: a member of the fixed option set.
pub fn valid_program(program: &str) -> bool {
    PROGRAM_OPTIONS.contains(&program)
}

/// National ID: exactly 16 decimal digits.
pub fn valid_national_id(nik: &str) -> bool {
    nik.len() == 16 && nik.chars().all(|c| c.is_ascii_digit())
}

/// Address: 10-200 characters.
pub fn valid_address(address: &str) -> bool {
    let len = address.chars().count();
    (10..=200).contains(&len)
}

/// Phone: 10-14 digits after stripping everything else.
pub fn valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=14).contains(&digits)
}
