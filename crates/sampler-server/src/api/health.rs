use actix_web::{HttpResponse, Responder, Scope, get, web};
use serde::Serialize;

use crate::model::{ApiResult, AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: u64,
    pub item_count: usize,
}

#[get("/liveness")]
async fn liveness() -> web::Json<ApiResult<String>> {
    web::Json(ApiResult::<String>::success("ok".to_string()))
}

#[get("/readiness")]
async fn readiness() -> web::Json<ApiResult<String>> {
    web::Json(ApiResult::<String>::success("ok".to_string()))
}

#[get("")]
async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let health_status = HealthStatus {
        status: "UP".to_string(),
        uptime_seconds: data.uptime_seconds(),
        item_count: data.items.len(),
    };

    HttpResponse::Ok().json(health_status)
}

pub fn routes() -> Scope {
    web::scope("/health")
        .service(health_check)
        .service(liveness)
        .service(readiness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus {
            status: "UP".to_string(),
            uptime_seconds: 12,
            item_count: 3,
        };

        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["status"], "UP");
        assert_eq!(value["uptimeSeconds"], 12);
        assert_eq!(value["itemCount"], 3);
    }
}
