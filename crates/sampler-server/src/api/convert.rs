//! Document conversion endpoint

use actix_web::{HttpResponse, Responder, Scope, post, web};

use crate::api::metrics::METRICS;
use crate::model::ApiResult;
use crate::service::convert;

#[post("/yaml")]
pub async fn to_yaml(body: web::Json<serde_json::Value>) -> impl Responder {
    match convert::to_yaml(&body) {
        Ok(yaml) => {
            METRICS.inc_conversions();

            HttpResponse::Ok()
                .content_type("text/yaml; charset=utf-8")
                .body(yaml)
        }
        Err(e) => ApiResult::http_internal_error(e),
    }
}

pub fn routes() -> Scope {
    web::scope("/convert").service(to_yaml)
}
