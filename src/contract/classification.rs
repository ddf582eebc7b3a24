//! Validation of the status and type classifiers against configured values.

use thiserror::Error;

/// A classifier value that is not in the configured list.
#[derive(Error, Debug, Clone)]
#[error("Invalid value '{value}'. Allowed: {allowed:?}")]
pub struct ClassificationError {
    pub value: String,
    pub allowed: Vec<String>,
}

/// Check `value` against the allowed values, ignoring ASCII case.
///
/// Returns the configured spelling so stored values stay canonical. An empty
/// allowed list accepts any value unchanged.
pub fn validate_classification(value: &str, allowed: &[String]) -> Result<String, ClassificationError> {
    if allowed.is_empty() {
        return Ok(value.to_string());
    }
    allowed
        .iter()
        .find(|s| s.eq_ignore_ascii_case(value))
        .cloned()
        .ok_or_else(|| ClassificationError {
            value: value.to_string(),
            allowed: allowed.to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses() -> Vec<String> {
        vec!["in-progress".to_string(), "signed".to_string(), "DONE".to_string()]
    }

    #[test]
    fn test_valid_value_returns_configured_spelling() {
        assert_eq!(validate_classification("signed", &statuses()).unwrap(), "signed");
        assert_eq!(validate_classification("done", &statuses()).unwrap(), "DONE");
    }

    #[test]
    fn test_invalid_value() {
        let err = validate_classification("archived", &statuses()).unwrap_err();
        assert_eq!(err.value, "archived");
        assert_eq!(err.allowed, statuses());
    }

    #[test]
    fn test_empty_list_accepts_anything() {
        assert_eq!(validate_classification("Whatever", &[]).unwrap(), "Whatever");
    }
}
