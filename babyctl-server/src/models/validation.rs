//! Validation error types

use std::fmt;

/// Client input that could not be turned into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Path identifier is not an integer
    InvalidId { value: String },

    /// Request body is not a decodable name record
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { .. } => write!(f, "Invalid ID"),
            Self::InvalidBody { .. } => write!(f, "Cannot decode JSON"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// The offending input or decoder message, for logs only.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidId { value } => value,
            Self::InvalidBody { reason } => reason,
        }
    }
}

/// Parse a path segment into a record id.
pub fn parse_id(raw: &str) -> Result<i32, ValidationError> {
    raw.parse::<i32>().map_err(|_| ValidationError::InvalidId {
        value: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("42"), Ok(42));
        assert_eq!(parse_id("-3"), Ok(-3));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for raw in ["abc", "", "1.5", "12a", "99999999999"] {
            assert_eq!(
                parse_id(raw),
                Err(ValidationError::InvalidId { value: raw.into() }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidBody {
            reason: "EOF".into(),
        };
        assert_eq!(err.to_string(), "Cannot decode JSON");
        assert_eq!(
            ValidationError::InvalidId { value: "x".into() }.to_string(),
            "Invalid ID"
        );
    }
}
