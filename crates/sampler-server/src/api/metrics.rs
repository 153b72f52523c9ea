//! Prometheus metrics endpoint for observability

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};
use std::time::Instant;

use actix_web::{HttpResponse, Responder, Scope, get, web};

use crate::model::AppState;

/// Application metrics collector
#[derive(Default)]
pub struct Metrics {
    /// Total HTTP requests received
    pub http_requests_total: AtomicU64,
    /// Items created through the API
    pub items_created_total: AtomicU64,
    /// Multipart uploads accepted
    pub uploads_total: AtomicU64,
    /// Sample document downloads
    pub downloads_total: AtomicU64,
    /// YAML conversions performed
    pub conversions_total: AtomicU64,
    /// Streaming responses started
    pub streams_total: AtomicU64,
    /// Websocket echo sessions opened
    pub ws_sessions_total: AtomicU64,
    /// Background tasks spawned
    pub background_tasks_total: AtomicU64,
    /// Text extraction cache hits
    pub text_cache_hits_total: AtomicU64,
    /// Text extraction cache misses
    pub text_cache_misses_total: AtomicU64,
    /// Start time for uptime calculation
    start_time: Option<Instant>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn inc_http_requests(&self) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_items_created(&self) {
        self.items_created_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_uploads(&self) {
        self.uploads_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_downloads(&self) {
        self.downloads_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_conversions(&self) {
        self.conversions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_streams(&self) {
        self.streams_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_ws_sessions(&self) {
        self.ws_sessions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_background_tasks(&self) {
        self.background_tasks_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_text_cache_hits(&self) {
        self.text_cache_hits_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_text_cache_misses(&self) {
        self.text_cache_misses_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.map(|t| t.elapsed().as_secs()).unwrap_or(0)
    }

    /// Format metrics in Prometheus text format
    pub fn to_prometheus_format(&self, item_count: usize) -> String {
        let mut output = String::with_capacity(2048);

        // Help and type declarations
        output.push_str(
            "# HELP sampler_http_requests_total Total number of HTTP requests received\n",
        );
        output.push_str("# TYPE sampler_http_requests_total counter\n");
        output.push_str(&format!(
            "sampler_http_requests_total {}\n",
            self.http_requests_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_items_created_total Total number of items created through the API\n",
        );
        output.push_str("# TYPE sampler_items_created_total counter\n");
        output.push_str(&format!(
            "sampler_items_created_total {}\n",
            self.items_created_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_uploads_total Total number of multipart uploads accepted\n",
        );
        output.push_str("# TYPE sampler_uploads_total counter\n");
        output.push_str(&format!(
            "sampler_uploads_total {}\n",
            self.uploads_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_downloads_total Total number of sample document downloads\n",
        );
        output.push_str("# TYPE sampler_downloads_total counter\n");
        output.push_str(&format!(
            "sampler_downloads_total {}\n",
            self.downloads_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_conversions_total Total number of YAML conversions performed\n",
        );
        output.push_str("# TYPE sampler_conversions_total counter\n");
        output.push_str(&format!(
            "sampler_conversions_total {}\n",
            self.conversions_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_streams_total Total number of streaming responses started\n",
        );
        output.push_str("# TYPE sampler_streams_total counter\n");
        output.push_str(&format!(
            "sampler_streams_total {}\n",
            self.streams_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_ws_sessions_total Total number of websocket echo sessions opened\n",
        );
        output.push_str("# TYPE sampler_ws_sessions_total counter\n");
        output.push_str(&format!(
            "sampler_ws_sessions_total {}\n",
            self.ws_sessions_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_background_tasks_total Total number of background tasks spawned\n",
        );
        output.push_str("# TYPE sampler_background_tasks_total counter\n");
        output.push_str(&format!(
            "sampler_background_tasks_total {}\n",
            self.background_tasks_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_text_cache_hits_total Total number of text extraction cache hits\n",
        );
        output.push_str("# TYPE sampler_text_cache_hits_total counter\n");
        output.push_str(&format!(
            "sampler_text_cache_hits_total {}\n",
            self.text_cache_hits_total.load(Ordering::Relaxed)
        ));

        output.push_str(
            "# HELP sampler_text_cache_misses_total Total number of text extraction cache misses\n",
        );
        output.push_str("# TYPE sampler_text_cache_misses_total counter\n");
        output.push_str(&format!(
            "sampler_text_cache_misses_total {}\n",
            self.text_cache_misses_total.load(Ordering::Relaxed)
        ));

        output.push_str("# HELP sampler_item_count Current number of items in the store\n");
        output.push_str("# TYPE sampler_item_count gauge\n");
        output.push_str(&format!("sampler_item_count {}\n", item_count));

        output.push_str(
            "# HELP sampler_uptime_seconds Number of seconds since the server started\n",
        );
        output.push_str("# TYPE sampler_uptime_seconds gauge\n");
        output.push_str(&format!("sampler_uptime_seconds {}\n", self.uptime_seconds()));

        output
    }
}

/// Global metrics instance
pub static METRICS: LazyLock<Arc<Metrics>> = LazyLock::new(|| Arc::new(Metrics::new()));

#[get("")]
pub async fn metrics(data: web::Data<AppState>) -> impl Responder {
    let item_count = data.items.len();

    let body = METRICS.to_prometheus_format(item_count);

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4; charset=utf-8")
        .body(body)
}

pub fn routes() -> Scope {
    web::scope("/metrics").service(metrics)
}
