use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRequest {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub page_context: Map<String, Value>, // opaque client payload, echoed back untouched
}

impl AgentRequest {
    /// Interprets an already-parsed JSON body. The body must be an object;
    /// absent fields take their defaults, wrong-typed fields are rejected
    /// rather than coerced. The object check is explicit: a derived struct
    /// `Deserialize` would also accept a positional JSON array through
    /// serde's sequence path.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom("request body must be a JSON object"));
        }
        serde_json::from_value(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub intent: String,
    pub response: String,
    pub page_context: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
