// src/platform.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::ImageData;

/// Structured page description returned by content extraction, mirroring
/// what the injected page script produces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageInfo {
    pub url: String,
    pub title: String,
    pub content: String,
    pub meta: PageMeta,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub description: String,
    pub keywords: String,
}

/// Browser capabilities the tool handlers delegate to. The host embedding
/// this crate supplies the implementation; every method performs at most one
/// platform call sequence, with no retry. Failures are descriptive strings
/// that handlers fold into the tool's textual result.
#[async_trait]
pub trait BrowserPlatform: Send + Sync {
    /// Open a new tab at the given URL.
    async fn create_tab(&self, url: &str) -> Result<(), String>;

    /// Read the current selection from the active tab. `None` when nothing
    /// is selected.
    async fn selected_text(&self) -> Result<Option<String>, String>;

    /// Write text to the system clipboard.
    async fn write_clipboard(&self, text: &str) -> Result<(), String>;

    /// Query the active tab and extract its page info.
    async fn page_info(&self) -> Result<PageInfo, String>;

    /// Capture the visible area of the active tab as an inline image.
    async fn capture_visible_tab(&self) -> Result<ImageData, String>;
}
