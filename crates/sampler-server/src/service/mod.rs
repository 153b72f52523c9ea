//! In-memory demo services
//!
//! The services backing the API handlers. All state is process-local:
//! a concurrent item store, a memoizing text inspector, and a pure
//! JSON-to-YAML converter.

pub mod convert;
pub mod items;
pub mod text;
