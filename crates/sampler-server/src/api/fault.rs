//! Error handling demonstration endpoint

use actix_web::{Responder, Scope, get, web};
use serde::Deserialize;
use tracing::warn;

use sampler_common::SamplerError;

use crate::model::ApiResult;

#[derive(Debug, Deserialize)]
pub struct FaultParam {
    pub bad: Option<String>,
}

/// Interpret the demo flag; anything other than true/1 is benign
fn is_bad(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

#[get("")]
pub async fn fault(params: web::Query<FaultParam>) -> impl Responder {
    let raw = params.bad.clone().unwrap_or_default();

    if is_bad(&raw) {
        warn!("demonstration failure requested");
        return ApiResult::http_bad_request(SamplerError::DemonstrationError);
    }

    ApiResult::<bool>::http_success(true)
}

pub fn routes() -> Scope {
    web::scope("/fault").service(fault)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bad_true_values() {
        assert!(is_bad("true"));
        assert!(is_bad("True"));
        assert!(is_bad("TRUE"));
        assert!(is_bad("1"));
        assert!(is_bad(" true "));
    }

    #[test]
    fn test_is_bad_false_values() {
        assert!(!is_bad(""));
        assert!(!is_bad("false"));
        assert!(!is_bad("0"));
        assert!(!is_bad("yes"));
    }
}
