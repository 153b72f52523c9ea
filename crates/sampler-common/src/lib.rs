//! Sampler Common - Shared types and utilities
//!
//! This crate provides the foundational types used across the Sampler workspace:
//! - Error types and error codes
//! - Small parsing and aggregation helpers

pub mod error;
pub mod utils;

// Re-exports for convenience
pub use error::{ErrorCode, SamplerError};
pub use utils::{NumberSummary, parse_int_list, summarize};
