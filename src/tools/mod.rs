// src/tools/mod.rs

pub mod executor;
pub mod gemini_format;
pub mod implementations;
pub mod registry;
pub mod types;

pub use executor::execute_tool;
pub use gemini_format::tools_to_function_declarations;
pub use registry::{get_all_tools, get_tool_by_name};
pub use types::{ToolCallRequest, ToolCallResult, ToolDefinition};
