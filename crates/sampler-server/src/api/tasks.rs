//! Background task endpoint

use actix_web::{Responder, Scope, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::metrics::METRICS;
use crate::model::{ApiResult, AppState};
use crate::startup::run_with_shutdown;

#[derive(Debug, Deserialize)]
pub struct TaskParam {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReceipt {
    pub id: String,
    pub name: String,
    pub started: bool,
}

#[post("")]
pub async fn spawn_task(
    data: web::Data<AppState>,
    params: web::Query<TaskParam>,
) -> impl Responder {
    let name = params.name.clone().unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return ApiResult::http_param_missing("name");
    }

    let id = uuid::Uuid::new_v4().to_string();
    let delay = data.configuration.task_delay();
    let shutdown_rx = data.shutdown.subscribe();

    METRICS.inc_background_tasks();

    let task_id = id.clone();
    let task_name = name.clone();
    tokio::spawn(async move {
        let work = async {
            info!(id = %task_id, name = %task_name, "background task started");
            tokio::time::sleep(delay).await;
            info!(id = %task_id, name = %task_name, "background task completed");
        };

        run_with_shutdown(work, shutdown_rx).await;
    });

    ApiResult::<TaskReceipt>::http_success(TaskReceipt {
        id,
        name,
        started: true,
    })
}

pub fn routes() -> Scope {
    web::scope("/tasks").service(spawn_task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_receipt_serialization() {
        let receipt = TaskReceipt {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "cleanup".to_string(),
            started: true,
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["name"], "cleanup");
        assert_eq!(value["started"], true);
    }

    #[test]
    fn test_task_param_deserialization() {
        let param: TaskParam = serde_json::from_str(r#"{"name": "cleanup"}"#).unwrap();
        assert_eq!(param.name, Some("cleanup".to_string()));
    }
}
