//! HTTP response envelope for API responses
//!
//! Every JSON endpoint answers with the same wrapper so clients can rely
//! on a uniform `code`/`message`/`data` shape for success and failure.

use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use serde::{Deserialize, Serialize};

use sampler_common::error::{PARAMETER_MISSING, SERVER_ERROR};

/// API result wrapper
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data,
        }
    }

    pub fn http_success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(data))
    }

    pub fn http_response(status: u16, code: i32, message: String, data: T) -> HttpResponse {
        HttpResponseBuilder::new(
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .json(Self {
            code,
            message,
            data,
        })
    }
}

impl ApiResult<String> {
    /// Create an internal server error response from an error
    pub fn http_internal_error<E: std::fmt::Display>(err: E) -> HttpResponse {
        HttpResponse::InternalServerError().json(Self {
            code: SERVER_ERROR.code,
            message: "error".to_string(),
            data: err.to_string(),
        })
    }

    /// Create a bad request error response
    pub fn http_bad_request<E: std::fmt::Display>(err: E) -> HttpResponse {
        HttpResponse::BadRequest().json(Self {
            code: 400,
            message: "error".to_string(),
            data: err.to_string(),
        })
    }

    /// Create a parameter missing error response
    pub fn http_param_missing(param_name: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(Self {
            code: PARAMETER_MISSING.code,
            message: PARAMETER_MISSING.message.to_string(),
            data: format!(
                "Required parameter '{}' type String is not present",
                param_name
            ),
        })
    }
}
