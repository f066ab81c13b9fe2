// src/api/mod.rs

pub mod transport;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::platform::BrowserPlatform;
use crate::settings::AppSettings;
use crate::tools::{execute_tool, get_all_tools, tools_to_function_declarations, ToolCallRequest};
use crate::types::{
    permissive_safety_settings, Content, GenerateContentRequest, GenerateContentResponse,
    ImageData, Part, ToolConfig, ToolDeclarations,
};

pub use transport::{HttpTransport, ModelTransport, DEFAULT_ENDPOINT};

/// Assemble a generateContent request.
///
/// Tool declarations and AUTO function-calling mode are included only when no
/// image is attached and the exchange allows tools; image analysis and tool
/// calling are mutually exclusive in a single call.
pub fn build_request(
    message: &str,
    image: Option<&ImageData>,
    allow_tools: bool,
) -> GenerateContentRequest {
    let mut parts = Vec::new();
    if let Some(image) = image {
        parts.push(Part::from(image));
    }
    parts.push(Part::Text {
        text: message.to_string(),
    });

    let include_tools = image.is_none() && allow_tools;

    GenerateContentRequest {
        contents: vec![Content { parts }],
        safety_settings: permissive_safety_settings(),
        tools: include_tools.then(|| {
            vec![ToolDeclarations {
                function_declarations: tools_to_function_declarations(&get_all_tools()),
            }]
        }),
        tool_config: include_tools.then(ToolConfig::auto),
    }
}

/// One chat exchange pipeline: build the request, send it, and dispatch the
/// response, executing at most one tool call. Stateless across calls apart
/// from the fixed tool registry and the selected model.
pub struct GeminiClient {
    model: String,
    api_key: String,
    transport: Arc<dyn ModelTransport>,
    platform: Arc<dyn BrowserPlatform>,
}

impl GeminiClient {
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        transport: Arc<dyn ModelTransport>,
        platform: Arc<dyn BrowserPlatform>,
    ) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            transport,
            platform,
        }
    }

    /// Client over HTTP with the configuration the settings file carries.
    pub fn from_settings(settings: &AppSettings, platform: Arc<dyn BrowserPlatform>) -> Self {
        Self::new(
            settings.model_id.clone(),
            settings.api_key.clone(),
            Arc::new(HttpTransport::new()),
            platform,
        )
    }

    pub fn platform(&self) -> &dyn BrowserPlatform {
        self.platform.as_ref()
    }

    /// Run a full user-initiated exchange. The reply is either the model's
    /// text or the textual result of the one tool it asked for.
    pub async fn send_message(
        &self,
        message: &str,
        image: Option<ImageData>,
    ) -> Result<String, ApiError> {
        self.call(message, image, true).await
    }

    /// Inner exchange used by both the public entry point and the compound
    /// tools that re-enter the pipeline. Nested calls pass
    /// `allow_tools = false`, limiting tool recursion to depth one.
    ///
    /// Boxed because tool execution can recurse back into this function.
    pub(crate) fn call<'a>(
        &'a self,
        message: &'a str,
        image: Option<ImageData>,
        allow_tools: bool,
    ) -> Pin<Box<dyn Future<Output = Result<String, ApiError>> + Send + 'a>> {
        Box::pin(async move {
            if self.api_key.trim().is_empty() {
                return Err(ApiError::MissingApiKey);
            }
            if self.model.trim().is_empty() {
                return Err(ApiError::MissingModel);
            }

            let request = build_request(message, image.as_ref(), allow_tools);
            let response = self
                .transport
                .generate(&self.model, &self.api_key, &request)
                .await?;

            self.dispatch(response, allow_tools).await
        })
    }

    /// Inspect the first part of the first candidate: plain text is returned
    /// verbatim; a function call is resolved against the registry and its
    /// textual result (success or failure description) becomes the reply.
    async fn dispatch(
        &self,
        response: GenerateContentResponse,
        allow_tools: bool,
    ) -> Result<String, ApiError> {
        let part = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .ok_or(ApiError::InvalidResponse)?;

        if let Some(call) = part.function_call {
            if !allow_tools {
                warn!(tool = %call.name, "ignoring tool call in a nested exchange");
                return Ok(format!(
                    "The model requested tool '{}', which is not available here",
                    call.name
                ));
            }

            let request = ToolCallRequest {
                name: call.name,
                call_id: uuid::Uuid::new_v4().to_string(),
                arguments: decode_args(call.args)?,
            };
            info!(tool = %request.name, "executing tool requested by the model");

            let result = execute_tool(self, &request).await;
            return Ok(result.into_text());
        }

        part.text.ok_or(ApiError::InvalidResponse)
    }
}

/// Function-call arguments arrive either as a structured object or as a
/// JSON-encoded string; both decode to the same mapping.
fn decode_args(args: Value) -> Result<Value, ApiError> {
    match args {
        Value::String(encoded) => {
            serde_json::from_str(&encoded).map_err(|_| ApiError::InvalidResponse)
        }
        Value::Null => Ok(json!({})),
        other => Ok(other),
    }
}
