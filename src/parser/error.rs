use crate::validation::CNPJ_LENGTH;
use thiserror::Error;

/// The only way parsing a CNPJ can fail. Format problems other than the length are
/// reported by [crate::check_format], not here.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(
        "CNPJ must have {} characters after removing the mask, received {actual}",
        CNPJ_LENGTH
    )]
    InvalidLength { actual: usize },
}

#[cfg(test)]
mod test {
    use crate::parser::error::FormatError;

    #[test]
    fn error_message_contains_the_received_length() {
        assert_eq!(
            FormatError::InvalidLength { actual: 3 }.to_string(),
            "CNPJ must have 14 characters after removing the mask, received 3"
        );
    }
}
