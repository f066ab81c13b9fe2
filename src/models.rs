// src/models.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL_ID: &str = "gemini-1.5-flash-8b";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Bundled model catalog, matching the shipped configuration.
pub static AVAILABLE_MODELS: Lazy<Vec<ModelInfo>> = Lazy::new(|| {
    vec![
        ModelInfo {
            id: "gemini-1.5-pro".to_string(),
            name: "Gemini 1.5 Pro".to_string(),
            description: "Most capable model for complex tasks".to_string(),
            max_tokens: 30720,
            temperature: 0.7,
        },
        ModelInfo {
            id: "gemini-1.5-flash-8b".to_string(),
            name: "Gemini 1.5 Flash-8B".to_string(),
            description: "Fast, efficient model with tool support".to_string(),
            max_tokens: 30720,
            temperature: 0.7,
        },
    ]
});

pub fn get_all_models() -> Vec<ModelInfo> {
    AVAILABLE_MODELS.clone()
}

pub fn get_model_by_id(id: &str) -> Option<ModelInfo> {
    AVAILABLE_MODELS.iter().find(|m| m.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_in_catalog() {
        assert!(get_model_by_id(DEFAULT_MODEL_ID).is_some());
    }

    #[test]
    fn test_unknown_model_is_none() {
        assert!(get_model_by_id("gemini-0.1-imaginary").is_none());
    }
}
