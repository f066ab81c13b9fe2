// src/tools/gemini_format.rs

use serde_json::{json, Value};

use super::types::ToolDefinition;

/// Convert tool definitions to Gemini function-declaration format
pub fn tools_to_function_declarations(tools: &[ToolDefinition]) -> Vec<Value> {
    tools
        .iter()
        .map(|tool| {
            json!({
                "name": tool.name,
                "description": tool.description,
                "parameters": tool.parameters
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::registry::get_all_tools;

    #[test]
    fn test_tools_to_function_declarations() {
        let tools = get_all_tools();
        let formatted = tools_to_function_declarations(&tools);

        assert_eq!(formatted.len(), tools.len());

        for tool_json in &formatted {
            assert!(tool_json["name"].is_string());
            assert!(tool_json["description"].is_string());
            assert!(tool_json["parameters"].is_object());
        }
    }
}
