use crate::normalization::{is_blank, mask_character_class, remove_mask};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Number of characters of a CNPJ once the mask is removed
pub const CNPJ_LENGTH: usize = 14;
/// Number of characters of the base (básico + ordem), without the verification digits
pub const CNPJ_BASE_LENGTH: usize = 12;

lazy_static! {
    // Checked against the raw input, so mask characters and lower-case letters are allowed
    static ref INVALID_CHARACTERS: Regex =
        Regex::new(&format!("[^A-Za-z0-9{}]", mask_character_class())).unwrap();
    // The 12 leading characters may be letters, the 2 verification digits are always numeric
    static ref FULL_CNPJ_PATTERN: Regex = Regex::new(r"^[A-Z0-9]{12}[0-9]{2}$").unwrap();
    static ref BASE_CNPJ_PATTERN: Regex = Regex::new(r"^[A-Z0-9]{12}$").unwrap();
}

/// The first check a CNPJ failed. Checks run in the order the variants are declared.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Error, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FormatViolation {
    #[error("The CNPJ is empty")]
    Empty,

    #[error("The CNPJ contains characters other than letters, digits, '.', '/' and '-'")]
    InvalidCharacters,

    #[error("The CNPJ does not have the expected number of characters after removing the mask")]
    InvalidLength,

    #[error("The CNPJ must be 12 letters or digits followed by 2 verification digits")]
    InvalidPattern,

    #[error("The CNPJ is a single repeated character")]
    RepeatedSequence,
}

impl FormatViolation {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Validates the format of a (possibly masked) CNPJ, returning the normalized value.
///
/// This never re-validates the verification digits against the checksum.
pub fn check_format(input: &str) -> Result<String, FormatViolation> {
    check_normalized(input, CNPJ_LENGTH, &FULL_CNPJ_PATTERN)
}

/// Checks that a CNPJ is well-formed: 12 letters or digits followed by 2 digits,
/// optionally masked, and not a single repeated character.
///
/// This is a total predicate and is safe to call on untrusted input.
pub fn is_valid_format(input: &str) -> bool {
    check_format(input).is_ok()
}

/// Same as [is_valid_format] for the 12-character base (básico + ordem) of a CNPJ.
pub fn is_valid_base_format(input: &str) -> bool {
    check_normalized(input, CNPJ_BASE_LENGTH, &BASE_CNPJ_PATTERN).is_ok()
}

fn check_normalized(
    input: &str,
    expected_length: usize,
    pattern: &Regex,
) -> Result<String, FormatViolation> {
    if is_blank(input) {
        return Err(FormatViolation::Empty);
    }

    if INVALID_CHARACTERS.is_match(input) {
        return Err(FormatViolation::InvalidCharacters);
    }

    let raw = remove_mask(input);

    // only ASCII is left at this point, so bytes and characters agree
    if raw.len() != expected_length {
        return Err(FormatViolation::InvalidLength);
    }

    if !pattern.is_match(&raw) {
        return Err(FormatViolation::InvalidPattern);
    }

    if is_repeated_sequence(&raw) {
        return Err(FormatViolation::RepeatedSequence);
    }

    Ok(raw)
}

/// Placeholder values such as `00000000000000` or `AAAAAAAAAAAAAA`
fn is_repeated_sequence(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => value.chars().count() >= 2 && chars.all(|c| c == first),
        None => false,
    }
}
