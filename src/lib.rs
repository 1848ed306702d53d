// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod normalization;
mod normalizer;
mod observability;
mod parser;
mod validation;

// This is the public API of the CNPJ normalizer library
pub use normalization::{remove_mask, MASK_CHARACTERS};
pub use normalizer::{config::NormalizerConfig, CnpjNormalizer};
pub use observability::labels::Labels;
pub use parser::{
    error::FormatError, parse_cnpj, ParsedCnpj, BASICO_LENGTH, DV_LENGTH, ORDEM_LENGTH,
};
pub use validation::{
    check_format, is_valid_base_format, is_valid_format, FormatViolation, CNPJ_BASE_LENGTH,
    CNPJ_LENGTH,
};
