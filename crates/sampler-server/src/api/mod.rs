//! HTTP API routing configuration

use actix_web::{Scope, web};

pub mod convert;
pub mod fault;
pub mod files;
pub mod health;
pub mod index;
pub mod items;
pub mod metrics;
pub mod stats;
pub mod stream;
pub mod tasks;
pub mod text;
pub mod ws;

/// Configure all API routes
pub fn routes() -> Scope {
    web::scope("")
        .service(index::describe)
        .service(health::routes())
        .service(items::routes())
        .service(text::routes())
        .service(files::routes())
        .service(convert::routes())
        .service(stats::routes())
        .service(fault::routes())
        .service(stream::routes())
        .service(ws::routes())
        .service(tasks::routes())
        .service(metrics::routes())
}
