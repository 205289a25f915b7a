//! The canonical outcome every animation call collapses into.
//!
//! The editor replies with a loosely-shaped JSON object; this module
//! folds whatever came back into exactly one of two variants. A missing
//! or non-boolean `success` flag counts as failure - never silently as
//! success.

use serde_json::Value;
use std::fmt;

/// Fallback message when the editor reports success without one.
pub const SUCCESS_FALLBACK: &str = "Animation operation successful.";

/// Fallback message when the editor reports failure without one.
pub const FAILURE_FALLBACK: &str = "An unknown error occurred during animation management.";

/// Prefix marking failures that originated in this process rather than
/// being reported by the editor.
pub const LOCAL_ERROR_PREFIX: &str = "Local error managing animation: ";

/// Terminal result of one animation operation.
///
/// Exactly two variants, no partial or streaming shapes. `Success`
/// carries the editor's structured payload when it sent one.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Success {
        message: String,
        data: Option<Value>,
    },
    Failure {
        message: String,
    },
}

impl ActionResult {
    /// Build a failure marking a local (non-editor) error, preserving
    /// the original error text.
    pub fn local_error(err: impl fmt::Display) -> Self {
        Self::Failure {
            message: format!("{LOCAL_ERROR_PREFIX}{err}"),
        }
    }

    /// Normalize an arbitrary editor reply.
    ///
    /// The boolean `success` flag is the sole discriminator. On success,
    /// `message` falls back to a fixed string and `data` is taken
    /// verbatim; on failure (including an absent or malformed flag) the
    /// `error` field is surfaced, with its own fallback.
    pub fn from_response(response: &Value) -> Self {
        let succeeded = response
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if succeeded {
            let message = response
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(SUCCESS_FALLBACK)
                .to_string();
            Self::Success {
                message,
                data: response.get("data").cloned(),
            }
        } else {
            let message = response
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or(FAILURE_FALLBACK)
                .to_string();
            Self::Failure { message }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message } => message,
        }
    }

    /// Convert to the caller-facing record at the gateway edge.
    ///
    /// Success flows back as a full record: `data` is an explicit null
    /// when the editor sent none, not an omitted key.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success { message, data } => serde_json::json!({
                "success": true,
                "message": message,
                "data": data.clone().unwrap_or(Value::Null),
            }),
            Self::Failure { message } => serde_json::json!({
                "success": false,
                "message": message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn success_with_message_and_data_passes_through() {
        let result = ActionResult::from_response(&json!({
            "success": true,
            "message": "ok",
            "data": { "x": 1 },
        }));

        assert_eq!(
            result.to_json(),
            json!({ "success": true, "message": "ok", "data": { "x": 1 } })
        );
    }

    #[test]
    fn bare_success_gets_fallback_message_and_null_data() {
        let result = ActionResult::from_response(&json!({ "success": true }));

        assert_eq!(
            result.to_json(),
            json!({
                "success": true,
                "message": "Animation operation successful.",
                "data": null,
            })
        );
    }

    #[test]
    fn failure_surfaces_the_error_field() {
        let result = ActionResult::from_response(&json!({
            "success": false,
            "error": "bad target",
        }));

        assert_eq!(
            result.to_json(),
            json!({ "success": false, "message": "bad target" })
        );
    }

    #[test]
    fn failure_without_error_field_gets_fallback() {
        let result = ActionResult::from_response(&json!({ "success": false }));

        assert_eq!(
            result.to_json(),
            json!({
                "success": false,
                "message": "An unknown error occurred during animation management.",
            })
        );
    }

    #[test]
    fn missing_success_flag_is_failure() {
        let result = ActionResult::from_response(&json!({ "message": "looks fine" }));
        assert!(!result.is_success());
        assert_eq!(result.message(), FAILURE_FALLBACK);
    }

    #[test]
    fn malformed_success_flag_is_failure() {
        for flag in [json!("true"), json!(1), json!(null), json!({})] {
            let result = ActionResult::from_response(&json!({ "success": flag }));
            assert!(!result.is_success(), "flag {flag} must not count as success");
        }
    }

    #[test]
    fn non_object_response_is_failure() {
        let result = ActionResult::from_response(&json!("garbage"));
        assert_eq!(
            result,
            ActionResult::Failure {
                message: FAILURE_FALLBACK.to_string(),
            }
        );
    }

    #[test]
    fn explicit_null_data_stays_null() {
        let result = ActionResult::from_response(&json!({
            "success": true,
            "message": "ok",
            "data": null,
        }));
        assert_eq!(result.to_json()["data"], json!(null));
    }

    #[test]
    fn local_error_preserves_the_original_text() {
        let result = ActionResult::local_error("connection lost");
        assert_eq!(
            result.message(),
            "Local error managing animation: connection lost"
        );
        assert_eq!(result.to_json()["success"], json!(false));
    }
}
