pub mod config;
pub mod metrics;


use self::config::NormalizerConfig;
use self::metrics::NormalizerMetrics;
use crate::normalization;
use crate::parser::{self, error::FormatError, ParsedCnpj};
use crate::validation::{self, FormatViolation};

/// Entry point for callers that want the CNPJ operations reported as metrics.
///
/// Every method gives exactly the same result as the free function of the same name.
/// The normalizer holds no mutable state, so a single instance can be shared between threads.
pub struct CnpjNormalizer {
    metrics: NormalizerMetrics,
}

impl CnpjNormalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            metrics: NormalizerMetrics::new(&config.labels),
        }
    }

    pub fn remove_mask(&self, input: &str) -> String {
        normalization::remove_mask(input)
    }

    pub fn check_format(&self, input: &str) -> Result<String, FormatViolation> {
        let result = validation::check_format(input);
        self.metrics.record_format_check(&result);
        result
    }

    pub fn is_valid_format(&self, input: &str) -> bool {
        self.check_format(input).is_ok()
    }

    pub fn is_valid_base_format(&self, input: &str) -> bool {
        let is_valid = validation::is_valid_base_format(input);
        if is_valid {
            self.metrics.valid_base_format.increment(1);
        } else {
            self.metrics.invalid_base_format.increment(1);
        }
        is_valid
    }

    pub fn parse_cnpj(&self, input: &str) -> Result<ParsedCnpj, FormatError> {
        let result = parser::parse_cnpj(input);
        match &result {
            Ok(_) => self.metrics.parsed.increment(1),
            Err(FormatError::InvalidLength { .. }) => {
                self.metrics.parse_invalid_length.increment(1)
            }
        }
        result
    }
}

impl Default for CnpjNormalizer {
    fn default() -> Self {
        CnpjNormalizer::new(&NormalizerConfig::default())
    }
}
