use crate::validation::FormatViolation;
use crate::Labels;
use metrics::{counter, Counter};
use std::collections::HashMap;
use strum::IntoEnumIterator;

const RESULT: &str = "result";

pub struct NormalizerMetrics {
    pub valid_format: Counter,
    pub format_violations: HashMap<FormatViolation, Counter>,
    pub valid_base_format: Counter,
    pub invalid_base_format: Counter,
    pub parsed: Counter,
    pub parse_invalid_length: Counter,
}

impl NormalizerMetrics {
    pub fn new(labels: &Labels) -> Self {
        NormalizerMetrics {
            valid_format: counter!(
                "cnpj.format_checks",
                labels.clone_with_labels(&[(RESULT, "valid")])
            ),
            format_violations: FormatViolation::iter()
                .map(|violation| {
                    let counter = counter!(
                        "cnpj.format_checks",
                        labels.clone_with_labels(&[(RESULT, violation.name())])
                    );
                    (violation, counter)
                })
                .collect(),
            valid_base_format: counter!(
                "cnpj.base_format_checks",
                labels.clone_with_labels(&[(RESULT, "valid")])
            ),
            invalid_base_format: counter!(
                "cnpj.base_format_checks",
                labels.clone_with_labels(&[(RESULT, "invalid")])
            ),
            parsed: counter!("cnpj.parse", labels.clone_with_labels(&[(RESULT, "ok")])),
            parse_invalid_length: counter!(
                "cnpj.parse",
                labels.clone_with_labels(&[(RESULT, "invalid_length")])
            ),
        }
    }

    pub fn record_format_check(&self, result: &Result<String, FormatViolation>) {
        match result {
            Ok(_) => self.valid_format.increment(1),
            Err(violation) => {
                if let Some(counter) = self.format_violations.get(violation) {
                    counter.increment(1);
                }
            }
        }
    }
}
