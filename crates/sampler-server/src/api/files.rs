//! File transfer endpoints: multipart upload and sample download

use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, Scope, get, http::StatusCode, post, web};
use futures::StreamExt;
use serde::Serialize;
use tracing::{info, warn};

use sampler_common::error::OVER_MAX_SIZE;
use sampler_common::SamplerError;

use crate::api::metrics::METRICS;
use crate::model::{ApiResult, AppState, SAMPLE_TEXT_LINE, SAMPLE_TEXT_REPEAT};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub filename: Option<String>,
    pub size: usize,
}

#[post("/upload")]
pub async fn upload(data: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    let limit = data.configuration.upload_limit();

    // Read file from multipart with proper error handling
    let mut found = false;
    let mut filename: Option<String> = None;
    let mut file_data: Vec<u8> = Vec::new();
    while let Some(field_result) = payload.next().await {
        let mut field = match field_result {
            Ok(f) => f,
            Err(e) => {
                warn!(error = %e, "Failed to read multipart field");
                return ApiResult::http_internal_error(e.to_string());
            }
        };

        if let Some(content_disposition) = field.content_disposition()
            && content_disposition.get_name().is_some_and(|n| n == "file")
        {
            found = true;
            filename = content_disposition.get_filename().map(|f| f.to_string());

            while let Some(chunk_result) = field.next().await {
                match chunk_result {
                    Ok(chunk) => file_data.extend_from_slice(&chunk),
                    Err(e) => {
                        warn!(error = %e, "Failed to read multipart chunk");
                        return ApiResult::http_internal_error(e.to_string());
                    }
                }

                if file_data.len() > limit {
                    return ApiResult::<String>::http_response(
                        StatusCode::BAD_REQUEST.as_u16(),
                        OVER_MAX_SIZE.code,
                        OVER_MAX_SIZE.message.to_string(),
                        SamplerError::OverMaxSize(file_data.len(), limit).to_string(),
                    );
                }
            }
            break;
        }
    }

    if !found {
        return ApiResult::http_param_missing("file");
    }

    METRICS.inc_uploads();
    info!(
        filename = filename.as_deref().unwrap_or(""),
        size = file_data.len(),
        "file uploaded"
    );

    ApiResult::<UploadReceipt>::http_success(UploadReceipt {
        filename,
        size: file_data.len(),
    })
}

/// The generated sample document body
fn sample_document() -> String {
    SAMPLE_TEXT_LINE.repeat(SAMPLE_TEXT_REPEAT)
}

#[get("/sample.txt")]
pub async fn download() -> HttpResponse {
    METRICS.inc_downloads();

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"sample.txt\"".to_string(),
        ))
        .body(sample_document())
}

pub fn routes() -> Scope {
    web::scope("/files").service(upload).service(download)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_shape() {
        let document = sample_document();

        assert_eq!(document.lines().count(), SAMPLE_TEXT_REPEAT);
        assert!(document.starts_with("Sample text from server\n"));
        assert_eq!(document.len(), SAMPLE_TEXT_LINE.len() * SAMPLE_TEXT_REPEAT);
    }

    #[test]
    fn test_upload_receipt_serialization() {
        let receipt = UploadReceipt {
            filename: Some("notes.txt".to_string()),
            size: 42,
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["filename"], "notes.txt");
        assert_eq!(value["size"], 42);
    }

    #[test]
    fn test_upload_receipt_without_filename() {
        let receipt = UploadReceipt {
            filename: None,
            size: 0,
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert!(value["filename"].is_null());
    }
}
