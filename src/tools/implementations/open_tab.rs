// src/tools/implementations/open_tab.rs

use crate::platform::BrowserPlatform;
use crate::tools::types::{ToolCallRequest, ToolCallResult};

pub async fn execute(platform: &dyn BrowserPlatform, request: &ToolCallRequest) -> ToolCallResult {
    let url = match request.arguments.get("url").and_then(|v| v.as_str()) {
        Some(u) => u,
        None => {
            return ToolCallResult::error(
                request.call_id.clone(),
                "Missing required parameter: url".to_string(),
            )
        }
    };

    match platform.create_tab(url).await {
        Ok(()) => ToolCallResult::success(
            request.call_id.clone(),
            format!("Opened new tab with URL: {}", url),
        ),
        Err(e) => ToolCallResult::error(
            request.call_id.clone(),
            format!("Failed to open tab: {}", e),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::MockPlatform;
    use serde_json::json;

    fn make_request(arguments: serde_json::Value) -> ToolCallRequest {
        ToolCallRequest {
            name: "openTab".to_string(),
            call_id: "test".to_string(),
            arguments,
        }
    }

    #[tokio::test]
    async fn test_opens_tab_with_url() {
        let platform = MockPlatform::default();
        let result = execute(&platform, &make_request(json!({ "url": "https://x.test" }))).await;
        assert!(result.success);
        assert_eq!(
            platform.opened_tabs.lock().unwrap().as_slice(),
            ["https://x.test"]
        );
    }

    #[tokio::test]
    async fn test_missing_url_is_an_error() {
        let platform = MockPlatform::default();
        let result = execute(&platform, &make_request(json!({}))).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("url"));
    }

    #[tokio::test]
    async fn test_platform_failure_becomes_error_text() {
        let platform = MockPlatform::failing("tabs unavailable");
        let result = execute(&platform, &make_request(json!({ "url": "https://x.test" }))).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("tabs unavailable"));
    }
}
