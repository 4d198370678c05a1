//! Required-parameter checks performed before any request is built.

use super::error::{ApiError, ApiResult};

/// Fail with [`ApiError::Validation`] naming `field` when `value` is blank.
pub fn require(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::missing(field));
    }
    Ok(())
}

/// Check every `(field, value)` pair in order, stopping at the first blank one.
pub fn require_all<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> ApiResult<()> {
    fields
        .into_iter()
        .try_for_each(|(field, value)| require(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_accepts_value() {
        assert!(require("hostId", "https:example.com:443").is_ok());
    }

    #[test]
    fn test_require_rejects_empty_and_whitespace() {
        for value in ["", " ", "\t\n"] {
            let err = require("hostId", value).unwrap_err();
            assert!(matches!(err, ApiError::Validation(ref f) if f == "hostId"));
        }
    }

    #[test]
    fn test_require_all_reports_first_missing() {
        let err = require_all([("userId", "42"), ("hostId", " "), ("url", "")]).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: hostId");
    }
}
