// src/tools/registry.rs

use once_cell::sync::Lazy;
use serde_json::json;

use super::types::ToolDefinition;

pub static BUILT_IN_TOOLS: Lazy<Vec<ToolDefinition>> = Lazy::new(|| {
    vec![
        ToolDefinition {
            name: "openTab".to_string(),
            description: "Opens a new browser tab with the specified URL".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The URL to open in the new tab"
                    }
                },
                "required": ["url"]
            }),
        },
        ToolDefinition {
            name: "searchWeb".to_string(),
            description: "Performs a web search using Google".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query to perform"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "getSelectedText".to_string(),
            description: "Gets the currently selected text from the active tab".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "dummy": {
                        "type": "string",
                        "description": "This parameter is not used but required by the API"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "copyToClipboard".to_string(),
            description: "Copies the specified text to the clipboard".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "The text to copy to the clipboard"
                    }
                },
                "required": ["text"]
            }),
        },
        ToolDefinition {
            name: "getCurrentTabInfo".to_string(),
            description: "Gets information about the current tab and analyzes it based on the provided question".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "question": {
                        "type": "string",
                        "description": "The specific question or analysis prompt about the page content"
                    }
                },
                "required": ["question"]
            }),
        },
        ToolDefinition {
            name: "analyzeScreenshot".to_string(),
            description: "Takes a screenshot of the current tab and analyzes it based on the provided question".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "question": {
                        "type": "string",
                        "description": "The specific question or analysis prompt about the screenshot"
                    }
                },
                "required": ["question"]
            }),
        },
    ]
});

pub fn get_all_tools() -> Vec<ToolDefinition> {
    BUILT_IN_TOOLS.clone()
}

pub fn get_tool_by_name(name: &str) -> Option<ToolDefinition> {
    BUILT_IN_TOOLS.iter().find(|t| t.name == name).cloned()
}
