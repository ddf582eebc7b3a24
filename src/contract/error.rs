//! Error types for contract operations.

use super::types::NUMBER_FIELD;
use crate::store::StoreError;
use std::fmt;
use thiserror::Error;

/// Why a contract was rejected on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// The field has no value
    Required,
    /// A new contract must take exactly the next number
    NotConsecutive { expected: u32, actual: u32 },
    /// Another contract already holds the number
    AlreadyExists,
}

impl ValidationReason {
    /// Message key for translating the reason into a user-facing text.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Required => "contract.number.required",
            Self::NotConsecutive { .. } => "contract.number.not_consecutive",
            Self::AlreadyExists => "contract.number.already_exists",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("value required"),
            Self::NotConsecutive { expected, actual } => write!(
                f,
                "number not consecutively numbered (expected {expected}, got {actual})"
            ),
            Self::AlreadyExists => f.write_str("number already exists"),
        }
    }
}

/// A field-level rejection, meant to be shown next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    #[must_use]
    pub fn number(reason: ValidationReason) -> Self {
        Self {
            field: NUMBER_FIELD,
            reason,
        }
    }
}

/// Unified error type for contract operations.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Contract not found: {0}")]
    NotFound(String),

    #[error("Invalid status '{status}'. Allowed: {allowed:?}")]
    InvalidStatus { status: String, allowed: Vec<String> },

    #[error("Invalid type '{contract_type}'. Allowed: {allowed:?}")]
    InvalidType {
        contract_type: String,
        allowed: Vec<String>,
    },

    #[error("Contract numbers exhausted after {0}")]
    NumberOverflow(u32),

    #[error("Autocompletion is not enabled for property '{0}'")]
    AutocompleteDisabled(String),
}

impl ContractError {
    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        ContractError::NotFound(id.into())
    }

    /// The validation failure, if this error is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ContractError::Validation(e) => Some(e),
            ContractError::Store(_)
            | ContractError::NotFound(_)
            | ContractError::InvalidStatus { .. }
            | ContractError::InvalidType { .. }
            | ContractError::NumberOverflow(_)
            | ContractError::AutocompleteDisabled(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_keys_are_distinct() {
        let keys = [
            ValidationReason::Required.key(),
            ValidationReason::NotConsecutive {
                expected: 1001,
                actual: 1000,
            }
            .key(),
            ValidationReason::AlreadyExists.key(),
        ];
        assert_eq!(keys[0], "contract.number.required");
        assert_ne!(keys[1], keys[2]);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::number(ValidationReason::NotConsecutive {
            expected: 1001,
            actual: 1000,
        });
        assert_eq!(err.field, "number");
        assert!(err.to_string().contains("not consecutively numbered"));

        let err = ValidationError::number(ValidationReason::AlreadyExists);
        assert_eq!(err.to_string(), "number: number already exists");
    }

    #[test]
    fn test_as_validation() {
        let err: ContractError = ValidationError::number(ValidationReason::Required).into();
        assert_eq!(
            err.as_validation().map(|v| &v.reason),
            Some(&ValidationReason::Required)
        );
        assert!(ContractError::not_found("x").as_validation().is_none());
    }
}
