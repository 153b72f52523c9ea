//! Data models module
//!
//! This module contains the configuration layer, the shared application
//! state, and the HTTP response envelope.
//!
//! # Module Structure
//!
//! - `constants` - Server defaults and configuration property names
//! - `config` - Configuration management
//! - `response` - HTTP response envelope (`ApiResult`)
//! - `app_state` - Application state shared across handlers

pub mod app_state;
pub mod config;
pub mod constants;
pub mod response;

// Re-export commonly used types at the module level
pub use app_state::AppState;
pub use config::Configuration;
pub use constants::*;
pub use response::ApiResult;
