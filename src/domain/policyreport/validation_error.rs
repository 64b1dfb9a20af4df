use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid value `{value}` for field `{field}`, expected one of: {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("`scope` and `scopeSelector` are mutually exclusive but both are set")]
    AmbiguousScope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_names_the_field() {
        let err = ValidationError::InvalidValue {
            field: "severity",
            value: "urgent".to_string(),
            expected: "critical, high",
        };
        assert_eq!(
            err.to_string(),
            "invalid value `urgent` for field `severity`, expected one of: critical, high"
        );
    }

    #[test]
    fn missing_field_display() {
        let err = ValidationError::MissingField("results[2].policy".to_string());
        assert_eq!(err.to_string(), "missing required field `results[2].policy`");
    }
}
