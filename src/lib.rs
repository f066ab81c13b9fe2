// src/lib.rs

pub mod api;
pub mod error;
pub mod models;
pub mod platform;
pub mod settings;
pub mod tools;
pub mod types;

pub use api::{build_request, GeminiClient, HttpTransport, ModelTransport};
pub use error::ApiError;
pub use platform::{BrowserPlatform, PageInfo, PageMeta};
pub use settings::{load_settings, save_settings, AppSettings};
pub use types::{ImageData, MAX_IMAGE_BYTES};
