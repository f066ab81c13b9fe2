// src/tools/executor.rs

use tracing::warn;

use super::implementations::{
    clipboard, open_tab, screenshot, search_web, selected_text, tab_info,
};
use super::types::{ToolCallRequest, ToolCallResult};
use crate::api::GeminiClient;

/// Resolve a tool call by name. Names the model can send are exactly the
/// registry entries; anything else is reported instead of silently dropped.
pub async fn execute_tool(client: &GeminiClient, request: &ToolCallRequest) -> ToolCallResult {
    match request.name.as_str() {
        "openTab" => open_tab::execute(client.platform(), request).await,
        "searchWeb" => search_web::execute(client.platform(), request).await,
        "getSelectedText" => selected_text::execute(client.platform(), request).await,
        "copyToClipboard" => clipboard::execute(client.platform(), request).await,
        "getCurrentTabInfo" => tab_info::execute(client, request).await,
        "analyzeScreenshot" => screenshot::execute(client, request).await,
        _ => {
            warn!(tool = %request.name, "model requested an unregistered tool");
            ToolCallResult::error(
                request.call_id.clone(),
                format!("Unknown tool: {}", request.name),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::HttpTransport;
    use crate::platform::testing::MockPlatform;
    use crate::tools::registry::get_all_tools;

    // The empty API key makes any accidental nested exchange fail before the
    // network; no request ever leaves this test.
    fn offline_client() -> GeminiClient {
        GeminiClient::new(
            "gemini-1.5-flash-8b",
            "",
            Arc::new(HttpTransport::new()),
            Arc::new(MockPlatform::default()),
        )
    }

    #[tokio::test]
    async fn test_every_registered_tool_has_a_handler() {
        let client = offline_client();
        for tool in get_all_tools() {
            let request = ToolCallRequest {
                name: tool.name.clone(),
                call_id: "test".to_string(),
                arguments: json!({}),
            };
            let result = execute_tool(&client, &request).await;
            if let Some(error) = &result.error {
                assert!(
                    !error.starts_with("Unknown tool"),
                    "{} fell through to the unknown-tool branch",
                    tool.name
                );
            }
        }
    }

    #[tokio::test]
    async fn test_unregistered_name_is_an_explicit_error() {
        let client = offline_client();
        let request = ToolCallRequest {
            name: "summonDragon".to_string(),
            call_id: "test".to_string(),
            arguments: json!({}),
        };
        let result = execute_tool(&client, &request).await;
        assert!(!result.success);
        assert_eq!(result.error.unwrap(), "Unknown tool: summonDragon");
    }
}
