use std::convert::From;

use thiserror::Error;

impl From<CreateCheckerError> for i64 {
    fn from(value: CreateCheckerError) -> i64 {
        match value {
            CreateCheckerError::EmptyPath { .. } => -2,
            CreateCheckerError::NoConstraint { .. } => -3,
            CreateCheckerError::EmptyFieldName { .. } => -4,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateCheckerError {
    /// Rules apply to fields, the root of a record can't be targeted
    #[error("Rule {rule_index} has an empty path")]
    EmptyPath { rule_index: usize },

    /// The rule is neither required nor has a validator, so it could never fail
    #[error("Rule {rule_index} is not required and has no validator")]
    NoConstraint { rule_index: usize },

    #[error("Rule {rule_index} has a path with an empty field name")]
    EmptyFieldName { rule_index: usize },
}
