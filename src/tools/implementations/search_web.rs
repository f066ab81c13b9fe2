// src/tools/implementations/search_web.rs

use crate::platform::BrowserPlatform;
use crate::tools::types::{ToolCallRequest, ToolCallResult};

pub async fn execute(platform: &dyn BrowserPlatform, request: &ToolCallRequest) -> ToolCallResult {
    let query = match request.arguments.get("query").and_then(|v| v.as_str()) {
        Some(q) => q,
        None => {
            return ToolCallResult::error(
                request.call_id.clone(),
                "Missing required parameter: query".to_string(),
            )
        }
    };

    let search_url = format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(query)
    );

    match platform.create_tab(&search_url).await {
        Ok(()) => ToolCallResult::success(
            request.call_id.clone(),
            format!("Performed web search for: {}", query),
        ),
        Err(e) => ToolCallResult::error(
            request.call_id.clone(),
            format!("Failed to perform web search: {}", e),
        ),
    }
}
