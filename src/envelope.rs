//! The snapd response envelope.
//!
//! Every daemon response wraps its payload the same way:
//!
//! ```json
//! {"type": "sync", "status-code": 200, "status": "OK", "result": ...}
//! ```
//!
//! Asynchronous operations answer with `"type": "async"` and a `change` id;
//! failures answer with `"type": "error"` and a `result.message`.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::DecodeError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct Envelope<T> {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub change: Option<String>,
    pub result: T,
}

#[derive(Debug, Deserialize)]
struct ErrorResult {
    message: String,
}

/// Decodes the envelope and returns its `result` payload.
pub(crate) fn decode_result<T: DeserializeOwned>(
    what: &'static str,
    body: &[u8],
) -> Result<T, DecodeError> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.result)
        .map_err(|source| DecodeError { what, source })
}

/// Returns the change id of an async response, if the body is one.
pub(crate) fn change_id(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Envelope<serde_json::Value>>(body)
        .ok()
        .filter(|envelope| envelope.kind.as_deref() == Some("async"))
        .and_then(|envelope| envelope.change)
}

/// Extracts a human-readable message from an error response.
///
/// Falls back to the raw body text when it is not an error envelope.
pub(crate) fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<Envelope<ErrorResult>>(body) {
        Ok(envelope) => envelope.result.message,
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                "no response body".to_string()
            } else {
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ERROR_JSON, NO_CUSTOM_RULES_JSON, app_permissions_json};

    #[test]
    fn test_decode_result_payload() {
        let value: serde_json::Value =
            decode_result("settings", app_permissions_json(true).as_bytes()).unwrap();
        assert_eq!(value["experimental"]["apparmor-prompting"], true);

        let rules: Vec<serde_json::Value> =
            decode_result("rules", NO_CUSTOM_RULES_JSON.as_bytes()).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_decode_missing_result() {
        let err = decode_result::<bool>("settings", br#"{"type":"sync"}"#).unwrap_err();
        assert_eq!(err.what, "settings");
        assert!(err.to_string().contains("missing field `result`"));
    }

    #[test]
    fn test_decode_malformed_body() {
        assert!(decode_result::<bool>("settings", b"not json").is_err());
        assert!(decode_result::<bool>("settings", b"").is_err());
    }

    #[test]
    fn test_change_id() {
        let body = br#"{"type":"async","status-code":202,"status":"Accepted","change":"42","result":null}"#;
        assert_eq!(change_id(body), Some("42".to_string()));
        assert_eq!(change_id(b"{}"), None);
        assert_eq!(change_id(NO_CUSTOM_RULES_JSON.as_bytes()), None);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(ERROR_JSON.as_bytes()), "access denied");
        assert_eq!(error_message(b"  bad gateway \n"), "bad gateway");
        assert_eq!(error_message(b""), "no response body");
    }
}
