// src/types/gemini.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image::ImageData;

/// Body of a `models/{model}:generateContent` call.
///
/// Field spelling follows the v1beta wire format: camelCase for the
/// tool/safety envelopes, snake_case for inline image parts.
#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "safetySettings")]
    pub safety_settings: Vec<SafetySetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDeclarations>>,
    #[serde(rename = "toolConfig", skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

#[derive(Serialize, Debug)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Ordered request parts: when an image is attached it comes first,
/// followed by the text prompt.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Part {
    InlineData { inline_data: InlineData },
    Text { text: String },
}

#[derive(Serialize, Debug)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl From<&ImageData> for Part {
    fn from(image: &ImageData) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.base64_data.clone(),
            },
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

const SAFETY_CATEGORIES: [&str; 5] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
    "HARM_CATEGORY_CIVIC_INTEGRITY",
];

/// All five categories pinned to the most permissive threshold. This is a
/// policy constant of the client, not a caller choice.
pub fn permissive_safety_settings() -> Vec<SafetySetting> {
    SAFETY_CATEGORIES
        .into_iter()
        .map(|category| SafetySetting {
            category,
            threshold: "BLOCK_NONE",
        })
        .collect()
}

#[derive(Serialize, Debug)]
pub struct ToolDeclarations {
    #[serde(rename = "functionDeclarations")]
    pub function_declarations: Vec<Value>,
}

#[derive(Serialize, Debug)]
pub struct ToolConfig {
    #[serde(rename = "functionCallingConfig")]
    pub function_calling_config: FunctionCallingConfig,
}

#[derive(Serialize, Debug)]
pub struct FunctionCallingConfig {
    pub mode: &'static str,
}

impl ToolConfig {
    pub fn auto() -> Self {
        Self {
            function_calling_config: FunctionCallingConfig { mode: "AUTO" },
        }
    }
}

// ==================== Response side ====================

#[derive(Deserialize, Debug)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
pub struct ResponsePart {
    pub text: Option<String>,
    #[serde(rename = "functionCall")]
    pub function_call: Option<FunctionCall>,
}

/// A tool invocation requested by the model. `args` may arrive either as a
/// structured object or as a JSON-encoded string; normalization happens at
/// dispatch time.
#[derive(Deserialize, Debug, Clone)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_part_serializes_as_inline_data() {
        let image = ImageData {
            mime_type: "image/png".to_string(),
            base64_data: "aGVsbG8=".to_string(),
        };
        let value = serde_json::to_value(Part::from(&image)).unwrap();
        assert_eq!(
            value,
            json!({ "inline_data": { "mime_type": "image/png", "data": "aGVsbG8=" } })
        );
    }

    #[test]
    fn test_safety_settings_cover_all_categories() {
        let settings = permissive_safety_settings();
        assert_eq!(settings.len(), 5);
        assert!(settings.iter().all(|s| s.threshold == "BLOCK_NONE"));
    }

    #[test]
    fn test_function_call_args_default_to_null() {
        let part: ResponsePart =
            serde_json::from_value(json!({ "functionCall": { "name": "openTab" } })).unwrap();
        let call = part.function_call.unwrap();
        assert_eq!(call.name, "openTab");
        assert!(call.args.is_null());
    }
}
