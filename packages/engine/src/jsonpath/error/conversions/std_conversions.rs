//! Standard conversions to `JsonPathError`

use super::super::types::{ErrorKind, JsonPathError};

/// Conversion from `serde_json::Error` to `JsonPathError`
impl From<serde_json::Error> for JsonPathError {
    fn from(error: serde_json::Error) -> Self {
        let message = error.to_string();

        let line = error.line();
        if line > 0 {
            let context = format!("line {}, column {}", line, error.column());
            JsonPathError::new(ErrorKind::InvalidJson, format!("{message} ({context})"))
        } else {
            JsonPathError::new(ErrorKind::InvalidJson, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_carries_location() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\": }")
            .expect_err("truncated object must not decode");
        let converted = JsonPathError::from(err);
        assert_eq!(converted.kind, ErrorKind::InvalidJson);
        assert!(converted.message.contains("line 1"));
    }
}
