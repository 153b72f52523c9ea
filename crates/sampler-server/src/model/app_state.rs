//! Application state shared across handlers

use std::time::Instant;

use crate::model::config::Configuration;
use crate::service::{items::ItemStore, text::TextService};
use crate::startup::ShutdownSignal;

/// Application state shared across all HTTP handlers
///
/// Wrapped in an `Arc` at startup and handed to the server factory, so
/// every worker sees the same store, cache, and shutdown signal.
pub struct AppState {
    pub configuration: Configuration,
    pub items: ItemStore,
    pub text: TextService,
    pub shutdown: ShutdownSignal,
    started_at: Instant,
}

impl AppState {
    pub fn new(configuration: Configuration, shutdown: ShutdownSignal) -> Self {
        let text = TextService::new(configuration.cache_capacity(), configuration.cache_ttl());

        Self {
            configuration,
            items: ItemStore::new(),
            text,
            shutdown,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
