//! HTTP server setup.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, middleware::RequestTiming, model::AppState};

/// Creates and binds the API HTTP server.
///
/// Every worker shares the same application state; requests pass through
/// the access logger and the timing middleware before reaching a handler.
pub fn api_server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(RequestTiming)
            .app_data(web::Data::from(app_state.clone()))
            .service(api::routes())
    })
    .bind((address, port))?
    .run())
}
