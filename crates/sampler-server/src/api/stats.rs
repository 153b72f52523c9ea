//! Aggregation endpoint over a comma separated integer list

use actix_web::{Responder, Scope, get, http::StatusCode, web};
use serde::Deserialize;

use sampler_common::error::PARAMETER_VALIDATE_ERROR;
use sampler_common::utils::{NumberSummary, parse_int_list, summarize};

use crate::model::ApiResult;

#[derive(Debug, Deserialize)]
pub struct ValuesParam {
    pub values: Option<String>,
}

#[get("")]
pub async fn stats(params: web::Query<ValuesParam>) -> impl Responder {
    let raw = params.values.clone().unwrap_or_default();

    match parse_int_list(&raw) {
        Ok(values) => ApiResult::<NumberSummary>::http_success(summarize(&values)),
        Err(e) => ApiResult::<String>::http_response(
            StatusCode::BAD_REQUEST.as_u16(),
            PARAMETER_VALIDATE_ERROR.code,
            "illegal values".to_string(),
            e.to_string(),
        ),
    }
}

pub fn routes() -> Scope {
    web::scope("/stats").service(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_param_deserialization() {
        let param: ValuesParam = serde_json::from_str(r#"{"values": "1,2,3"}"#).unwrap();
        assert_eq!(param.values, Some("1,2,3".to_string()));

        let param: ValuesParam = serde_json::from_str("{}").unwrap();
        assert!(param.values.is_none());
    }
}
