//! Tool calling definitions exchanged with the host framework

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition (for function calling).
///
/// `parameters` is a JSON-Schema-like object:
/// `{"type": "object", "properties": {name: {"type", "description"?}}, "required": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// Function invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}
