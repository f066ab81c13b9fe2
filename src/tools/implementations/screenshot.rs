// src/tools/implementations/screenshot.rs

use crate::api::GeminiClient;
use crate::tools::types::{ToolCallRequest, ToolCallResult};

/// Compound tool: capture the visible tab, then ask the model about the
/// image. Attaching the image already suppresses tool declarations on the
/// nested call; the explicit flag keeps that guarantee structural.
pub async fn execute(client: &GeminiClient, request: &ToolCallRequest) -> ToolCallResult {
    let question = match request.arguments.get("question").and_then(|v| v.as_str()) {
        Some(q) => q,
        None => {
            return ToolCallResult::error(
                request.call_id.clone(),
                "Missing required parameter: question".to_string(),
            )
        }
    };

    let screenshot = match client.platform().capture_visible_tab().await {
        Ok(image) => image,
        Err(e) => {
            return ToolCallResult::error(
                request.call_id.clone(),
                format!("Failed to analyze screenshot: {}", e),
            )
        }
    };

    match client.call(question, Some(screenshot), false).await {
        Ok(answer) => ToolCallResult::success(request.call_id.clone(), answer),
        Err(e) => ToolCallResult::error(
            request.call_id.clone(),
            format!("Failed to analyze screenshot: {}", e),
        ),
    }
}
