// src/tools/implementations/clipboard.rs

use crate::platform::BrowserPlatform;
use crate::tools::types::{ToolCallRequest, ToolCallResult};

pub async fn execute(platform: &dyn BrowserPlatform, request: &ToolCallRequest) -> ToolCallResult {
    let text = match request.arguments.get("text").and_then(|v| v.as_str()) {
        Some(t) => t,
        None => {
            return ToolCallResult::error(
                request.call_id.clone(),
                "Missing required parameter: text".to_string(),
            )
        }
    };

    match platform.write_clipboard(text).await {
        Ok(()) => ToolCallResult::success(
            request.call_id.clone(),
            format!("Copied to clipboard: {}", text),
        ),
        Err(e) => ToolCallResult::error(
            request.call_id.clone(),
            format!("Failed to copy to clipboard: {}", e),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::MockPlatform;
    use serde_json::json;

    #[tokio::test]
    async fn test_writes_text_to_clipboard() {
        let platform = MockPlatform::default();
        let request = ToolCallRequest {
            name: "copyToClipboard".to_string(),
            call_id: "test".to_string(),
            arguments: json!({ "text": "abc" }),
        };
        let result = execute(&platform, &request).await;
        assert!(result.success);
        assert_eq!(result.output, "Copied to clipboard: abc");
        assert_eq!(platform.clipboard.lock().unwrap().as_slice(), ["abc"]);
    }

    #[tokio::test]
    async fn test_missing_text_is_an_error() {
        let platform = MockPlatform::default();
        let request = ToolCallRequest {
            name: "copyToClipboard".to_string(),
            call_id: "test".to_string(),
            arguments: json!({}),
        };
        let result = execute(&platform, &request).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("text"));
    }
}
