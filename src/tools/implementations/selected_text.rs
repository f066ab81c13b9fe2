// src/tools/implementations/selected_text.rs

use crate::platform::BrowserPlatform;
use crate::tools::types::{ToolCallRequest, ToolCallResult};

// The schema declares an unused "dummy" parameter, so nothing to validate.
pub async fn execute(platform: &dyn BrowserPlatform, request: &ToolCallRequest) -> ToolCallResult {
    match platform.selected_text().await {
        Ok(Some(text)) if !text.is_empty() => {
            ToolCallResult::success(request.call_id.clone(), text)
        }
        Ok(_) => ToolCallResult::success(request.call_id.clone(), "No text selected".to_string()),
        Err(e) => ToolCallResult::error(
            request.call_id.clone(),
            format!("Failed to read selection: {}", e),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::MockPlatform;
    use serde_json::json;

    fn make_request() -> ToolCallRequest {
        ToolCallRequest {
            name: "getSelectedText".to_string(),
            call_id: "test".to_string(),
            arguments: json!({}),
        }
    }

    #[tokio::test]
    async fn test_returns_selection() {
        let platform = MockPlatform {
            selection: Some("quoted passage".to_string()),
            ..MockPlatform::default()
        };
        let result = execute(&platform, &make_request()).await;
        assert!(result.success);
        assert_eq!(result.output, "quoted passage");
    }

    #[tokio::test]
    async fn test_empty_selection_has_fallback_text() {
        let platform = MockPlatform::default();
        let result = execute(&platform, &make_request()).await;
        assert!(result.success);
        assert_eq!(result.output, "No text selected");
    }
}
