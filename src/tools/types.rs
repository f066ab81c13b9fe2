// src/tools/types.rs

use serde::{Deserialize, Serialize};

/// A tool exposed to the model: name, description, and a JSON-schema object
/// describing its parameters. Declarations are fixed at process start.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallRequest {
    pub name: String,
    pub call_id: String,
    pub arguments: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub call_id: String,
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
}

impl ToolCallResult {
    pub fn success(call_id: String, output: String) -> Self {
        Self {
            call_id,
            success: true,
            output,
            error: None,
        }
    }

    pub fn error(call_id: String, error: String) -> Self {
        Self {
            call_id,
            success: false,
            output: String::new(),
            error: Some(error),
        }
    }

    /// The text surfaced to the user: the tool's output, or the failure
    /// description when the call did not succeed.
    pub fn into_text(self) -> String {
        if self.success {
            self.output
        } else {
            self.error.unwrap_or_else(|| "Tool call failed".to_string())
        }
    }
}
