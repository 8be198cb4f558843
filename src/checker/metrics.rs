use metrics::{counter, Counter};

use crate::checker::config::SecondaryValidator;
use crate::Labels;

const KIND: &str = "kind";
const VALIDATOR: &str = "validator";

pub struct CheckerMetrics {
    pub num_checked_records: Counter,
    pub missing_violations: Counter,
    pub invalid_violations: Counter,
}

impl CheckerMetrics {
    pub fn new(labels: &Labels) -> Self {
        CheckerMetrics {
            num_checked_records: counter!("checker.records", labels.clone()),
            missing_violations: counter!(
                "checker.violations",
                labels.clone_with_labels(Labels::new(&[(KIND, "missing")]))
            ),
            invalid_violations: counter!(
                "checker.violations",
                labels.clone_with_labels(Labels::new(&[(KIND, "invalid")]))
            ),
        }
    }
}

pub struct RuleMetrics {
    pub validation_rejections: Counter,
}

impl RuleMetrics {
    pub fn new(labels: &Labels, validator: Option<SecondaryValidator>) -> Self {
        RuleMetrics {
            validation_rejections: match validator {
                Some(validator) => counter!(
                    "validation.rejections",
                    labels.clone_with_labels(Labels::new(&[(VALIDATOR, validator.name())]))
                ),
                None => Counter::noop(),
            },
        }
    }
}
