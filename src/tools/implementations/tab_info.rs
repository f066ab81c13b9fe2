// src/tools/implementations/tab_info.rs

use crate::api::GeminiClient;
use crate::tools::types::{ToolCallRequest, ToolCallResult};

/// The injected extraction script caps page text at this many characters.
const PAGE_CONTENT_LIMIT: usize = 15_000;

/// Compound tool: extract the active page, then ask the model about it.
/// The nested exchange runs without tool declarations, so it cannot recurse
/// further.
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

    let page = match client.platform().page_info().await {
        Ok(page) => page,
        Err(e) => {
            return ToolCallResult::error(
                request.call_id.clone(),
                format!("Failed to analyze page content: {}", e),
            )
        }
    };

    let content: String = page.content.chars().take(PAGE_CONTENT_LIMIT).collect();

    let prompt = format!(
        "Analyze this webpage content to answer the following question: \"{}\"\n\n\
         Content from: {} ({})\n\n\
         {}\n\n\
         Please provide a clear, focused response addressing the question. \
         Format your response in markdown.",
        question, page.title, page.url, content
    );

    match client.call(&prompt, None, false).await {
        Ok(answer) => ToolCallResult::success(request.call_id.clone(), answer),
        Err(e) => ToolCallResult::error(
            request.call_id.clone(),
            format!("Failed to analyze page content: {}", e),
        ),
    }
}
