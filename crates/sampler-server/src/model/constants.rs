//! Common constants for the Sampler server
//!
//! Defaults and configuration property names shared by the configuration
//! layer and the handlers.

// Network defaults. The server binds to loopback so it is only reachable
// from the local machine unless explicitly reconfigured.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// Configuration property names
pub const SERVER_ADDRESS_PROPERTY: &str = "server.address";
pub const SERVER_PORT_PROPERTY: &str = "server.port";
pub const LOGGING_DIR_PROPERTY: &str = "logging.dir";
pub const LOGGING_CONSOLE_PROPERTY: &str = "logging.console";
pub const LOGGING_FILE_PROPERTY: &str = "logging.file";
pub const LOGGING_LEVEL_PROPERTY: &str = "logging.level";
pub const UPLOAD_LIMIT_PROPERTY: &str = "upload.limit";
pub const STREAM_DELAY_PROPERTY: &str = "stream.delay";
pub const STREAM_COUNT_PROPERTY: &str = "stream.count";
pub const CACHE_TTL_PROPERTY: &str = "cache.ttl";
pub const CACHE_CAPACITY_PROPERTY: &str = "cache.capacity";
pub const SHUTDOWN_TIMEOUT_PROPERTY: &str = "shutdown.timeout";
pub const TASK_DELAY_PROPERTY: &str = "task.delay";

// Upload handling
pub const DEFAULT_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

// Streaming endpoint: lines emitted by default, hard cap, inter-chunk delay
pub const DEFAULT_STREAM_COUNT: u64 = 5;
pub const DEFAULT_MAX_STREAM_COUNT: u64 = 1000;
pub const DEFAULT_STREAM_DELAY_MS: u64 = 100;

// Text extraction cache
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

// Graceful shutdown grace period
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 2;

// Background task simulated work duration
pub const DEFAULT_TASK_DELAY_MS: u64 = 200;

// Item pricing
pub const DEFAULT_TAX_RATE: f64 = 0.1;

// Sample download document
pub const SAMPLE_TEXT_LINE: &str = "Sample text from server\n";
pub const SAMPLE_TEXT_REPEAT: usize = 10;
