//! Application startup utilities module.
//!
//! Server construction, logging initialization, and shutdown coordination.

mod http;
mod logging;
mod shutdown;

pub use http::api_server;
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{GracefulShutdown, ShutdownSignal, run_with_shutdown, wait_for_shutdown_signal};
