//! Phone number normalization.

/// Country code substituted for the local trunk prefix.
const COUNTRY_CODE: &str = "62";

/// Normalize a phone number to international form.
///
/// Strips all non-digit characters; a leading trunk `0` is replaced with
/// the country code. No length validation happens here — that is the
/// validator's job, and it runs on the raw input first.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.strip_prefix('0') {
        Some(rest) => format!("{COUNTRY_CODE}{rest}"),
        None => digits,
    }
}
