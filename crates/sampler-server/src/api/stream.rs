//! Chunked streaming endpoint

use actix_web::{HttpResponse, Responder, Scope, get, http::StatusCode, web};
use bytes::Bytes;
use futures::StreamExt;
use serde::Deserialize;

use sampler_common::error::PARAMETER_VALIDATE_ERROR;

use crate::api::metrics::METRICS;
use crate::model::{ApiResult, AppState, DEFAULT_STREAM_COUNT};

#[derive(Debug, Deserialize)]
pub struct CountParam {
    pub count: Option<String>,
}

#[get("/numbers")]
pub async fn stream_numbers(
    data: web::Data<AppState>,
    params: web::Query<CountParam>,
) -> impl Responder {
    let raw = params.count.clone().unwrap_or_default().trim().to_string();
    let count: u64 = if raw.is_empty() {
        DEFAULT_STREAM_COUNT
    } else {
        match raw.parse() {
            Ok(count) => count,
            Err(_) => {
                return ApiResult::<String>::http_response(
                    StatusCode::BAD_REQUEST.as_u16(),
                    PARAMETER_VALIDATE_ERROR.code,
                    "illegal count".to_string(),
                    format!("count [{}] is not a number", raw),
                );
            }
        }
    };

    let count = count.min(data.configuration.stream_max_count());
    let delay = data.configuration.stream_delay();

    // Emit the first line immediately, the rest after the configured delay
    let body = futures::stream::iter(0..count).then(move |i| async move {
        if i > 0 {
            tokio::time::sleep(delay).await;
        }
        Ok::<Bytes, actix_web::Error>(Bytes::from(format!("{}\n", i)))
    });

    METRICS.inc_streams();

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .streaming(body)
}

pub fn routes() -> Scope {
    web::scope("/stream").service(stream_numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_param_deserialization() {
        let param: CountParam = serde_json::from_str(r#"{"count": "3"}"#).unwrap();
        assert_eq!(param.count, Some("3".to_string()));

        let param: CountParam = serde_json::from_str("{}").unwrap();
        assert!(param.count.is_none());
    }

    #[test]
    fn test_default_stream_count() {
        assert_eq!(DEFAULT_STREAM_COUNT, 5);
    }
}
