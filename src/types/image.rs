// src/types/image.rs

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Matches the original popup's upload limit.
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// An inline image payload for multimodal analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub mime_type: String,
    pub base64_data: String,
}

impl ImageData {
    /// Encode raw image bytes for inline transmission. Rejects payloads
    /// over [`MAX_IMAGE_BYTES`].
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(format!(
                "Image is {} bytes; the maximum is {} bytes",
                bytes.len(),
                MAX_IMAGE_BYTES
            ));
        }
        Ok(Self {
            mime_type: mime_type.to_string(),
            base64_data: STANDARD.encode(bytes),
        })
    }
}
