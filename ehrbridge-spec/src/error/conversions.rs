//! Type Conversions for EhrError
//!
//! From implementations for the error types the runtime crates bubble up.

use super::types::EhrError;

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for EhrError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Unavailable(format!("request timed out: {err}"));
        }
        Self::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for EhrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Code;

    #[test]
    fn serde_json_error_is_internal() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: EhrError = json_err.into();
        assert_eq!(err.code(), Code::Internal);
    }
}
