//! Service descriptor endpoint

use actix_web::{Responder, get, web};
use serde::Serialize;

use crate::model::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub name: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub endpoints: Vec<EndpointDescriptor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub method: &'static str,
    pub path: &'static str,
    pub concept: &'static str,
}

/// One entry per demonstrated concept
fn endpoint_table() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor {
            method: "GET",
            path: "/items/{id}",
            concept: "path parameters and not-found handling",
        },
        EndpointDescriptor {
            method: "POST",
            path: "/items",
            concept: "form submission and validation",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/items",
            concept: "listing the in-memory store",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/items/{id}/price",
            concept: "derived values with query defaults",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/text/numbers",
            concept: "regex extraction with memoization",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/text/email",
            concept: "regex validation",
        },
        EndpointDescriptor {
            method: "POST",
            path: "/files/upload",
            concept: "multipart file upload",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/files/sample.txt",
            concept: "file download",
        },
        EndpointDescriptor {
            method: "POST",
            path: "/convert/yaml",
            concept: "JSON to YAML conversion",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/stats",
            concept: "aggregation over a parsed list",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/fault",
            concept: "uniform error envelopes",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/stream/numbers",
            concept: "chunked streaming response",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/ws/echo",
            concept: "websocket echo",
        },
        EndpointDescriptor {
            method: "POST",
            path: "/tasks",
            concept: "detached background tasks",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/health",
            concept: "health reporting",
        },
        EndpointDescriptor {
            method: "GET",
            path: "/metrics",
            concept: "Prometheus exposition",
        },
    ]
}

#[get("/")]
pub async fn describe(data: web::Data<AppState>) -> impl Responder {
    let descriptor = ServiceDescriptor {
        name: "sampler".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: data.uptime_seconds(),
        endpoints: endpoint_table(),
    };

    web::Json(descriptor)
}
