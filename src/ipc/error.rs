use serde::Serialize;
use serde_json::json;

use crate::error::RegistryError;

/// Error half of a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fault {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Fault {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_params(message: impl Into<String>) -> Self {
        Self::new("bad_params", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<RegistryError> for Fault {
    fn from(e: RegistryError) -> Self {
        Fault::new(e.code(), e.to_string())
    }
}

pub type HandlerResult = Result<serde_json::Value, Fault>;

/// Wraps a handler outcome in the `{id, ok, result|error}` envelope.
pub fn respond(id: &str, outcome: HandlerResult) -> serde_json::Value {
    match outcome {
        Ok(result) => json!({ "id": id, "ok": true, "result": result }),
        Err(fault) => json!({ "id": id, "ok": false, "error": fault }),
    }
}
