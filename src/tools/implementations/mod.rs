// src/tools/implementations/mod.rs

pub mod clipboard;
pub mod open_tab;
pub mod screenshot;
pub mod search_web;
pub mod selected_text;
pub mod tab_info;
