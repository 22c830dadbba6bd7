#![allow(dead_code)]

/// Body returned by the Amazon Receipt Verification Service alongside a
/// non-2xx status code.
#[derive(Debug, Default)]
pub struct ErrorResponseModel {
    pub(crate) message: String,
    pub(crate) status: bool,
}

impl ErrorResponseModel {
    /// Best-effort parse. Each field is taken only if present with the
    /// expected type; a mistyped `status` does not discard `message`. A body
    /// that is not a JSON object yields an empty message.
    pub(crate) fn parse_lenient(body: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };
        Self {
            message: value
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or_default()
                .to_string(),
            status: value
                .get("status")
                .and_then(|s| s.as_bool())
                .unwrap_or_default(),
        }
    }
}
