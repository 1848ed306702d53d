pub mod error;

use crate::normalization::remove_mask;
use crate::parser::error::FormatError;
use crate::validation::CNPJ_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const BASICO_LENGTH: usize = 8;
pub const ORDEM_LENGTH: usize = 4;
pub const DV_LENGTH: usize = 2;

/// A CNPJ split into its three fixed-width segments.
/// Concatenating `basico`, `ordem` and `dv` gives back the normalized CNPJ.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedCnpj {
    /// Identifies the root entity
    pub basico: String,
    /// Identifies the establishment (head office or branch) of the entity
    pub ordem: String,
    /// Verification digits, never checked against the checksum
    pub dv: String,
}

impl ParsedCnpj {
    pub fn basico(&self) -> &str {
        &self.basico
    }

    pub fn ordem(&self) -> &str {
        &self.ordem
    }

    pub fn dv(&self) -> &str {
        &self.dv
    }

    /// The 12 characters preceding the verification digits (básico + ordem)
    pub fn base(&self) -> String {
        format!("{}{}", self.basico, self.ordem)
    }

    pub fn into_parts(self) -> (String, String, String) {
        (self.basico, self.ordem, self.dv)
    }
}

impl Display for ParsedCnpj {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.basico, self.ordem, self.dv)
    }
}

impl FromStr for ParsedCnpj {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cnpj(s)
    }
}

/// Splits a CNPJ into básico (8), ordem (4) and verification digits (2), after removing
/// the mask.
///
/// Only the length is checked here. The input is expected to have been accepted by
/// [crate::is_valid_format] already: a 14-character value that fails the other format
/// checks is still split.
pub fn parse_cnpj(input: &str) -> Result<ParsedCnpj, FormatError> {
    let raw = remove_mask(input);

    let actual = raw.chars().count();
    if actual != CNPJ_LENGTH {
        return Err(FormatError::InvalidLength { actual });
    }

    let (basico, rest) = split_at_char(&raw, BASICO_LENGTH);
    let (ordem, dv) = split_at_char(rest, ORDEM_LENGTH);
    debug_assert_eq!(dv.chars().count(), DV_LENGTH);

    Ok(ParsedCnpj {
        basico: basico.to_string(),
        ordem: ordem.to_string(),
        dv: dv.to_string(),
    })
}

// The value isn't guaranteed to be ASCII, so split on a char boundary
fn split_at_char(value: &str, char_count: usize) -> (&str, &str) {
    let byte_index = value
        .char_indices()
        .nth(char_count)
        .map_or(value.len(), |(index, _)| index);
    value.split_at(byte_index)
}
