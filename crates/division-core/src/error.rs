//! Error types for Division

use thiserror::Error;

/// The main error type for Division operations
#[derive(Debug, Error)]
pub enum DivisionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Behaviour error: {0}")]
    BehaviourError(String),
}

/// Result type alias for Division operations
pub type Result<T> = std::result::Result<T, DivisionError>;

impl From<toml::de::Error> for DivisionError {
    fn from(err: toml::de::Error) -> Self {
        DivisionError::TomlParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = DivisionError::ValueOutOfRange {
            field: "target_hz".into(),
            min: 0.0,
            max: 1000.0,
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Value out of range: target_hz must be between 0 and 1000, got -1"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("target_hz = ");
        let err: DivisionError = parse.unwrap_err().into();
        assert!(matches!(err, DivisionError::TomlParseError(_)));
    }
}
