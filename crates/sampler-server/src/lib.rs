// Main library module for Sampler - a web framework feature demo service
// One endpoint group per concept: forms, uploads, regex, conversion,
// error envelopes, streaming, websockets, and background tasks.

// Module declarations
pub mod api; // API handlers
pub mod middleware; // HTTP middleware
pub mod model; // Data models, configuration, and response envelope
pub mod service; // In-memory demo services
pub mod startup; // Application startup utilities

// Re-export common types to keep handler imports short
pub use sampler_common::{ErrorCode, SamplerError};
