//! Text inspection endpoints backed by the cached text service

use actix_web::{Responder, Scope, get, web};
use serde::{Deserialize, Serialize};

use crate::model::{ApiResult, AppState};
use crate::service::text;

#[derive(Debug, Deserialize)]
pub struct TextParam {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailParam {
    pub candidate: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersFound {
    pub numbers: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCheck {
    pub candidate: String,
    pub valid: bool,
}

#[get("/numbers")]
pub async fn find_numbers(
    data: web::Data<AppState>,
    params: web::Query<TextParam>,
) -> impl Responder {
    let Some(text) = params.text.clone() else {
        return ApiResult::http_param_missing("text");
    };

    let numbers = data.text.extract_numbers(&text);

    ApiResult::<NumbersFound>::http_success(NumbersFound { numbers })
}

#[get("/email")]
pub async fn check_email(params: web::Query<EmailParam>) -> impl Responder {
    let Some(candidate) = params.candidate.clone() else {
        return ApiResult::http_param_missing("candidate");
    };

    let valid = text::is_valid_email(&candidate);

    ApiResult::<EmailCheck>::http_success(EmailCheck { candidate, valid })
}

pub fn routes() -> Scope {
    web::scope("/text").service(find_numbers).service(check_email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_param_deserialization() {
        let param: TextParam = serde_json::from_str(r#"{"text": "a1b2"}"#).unwrap();
        assert_eq!(param.text, Some("a1b2".to_string()));

        let param: TextParam = serde_json::from_str("{}").unwrap();
        assert!(param.text.is_none());
    }

    #[test]
    fn test_email_check_serialization() {
        let check = EmailCheck {
            candidate: "user@example.com".to_string(),
            valid: true,
        };

        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value["candidate"], "user@example.com");
        assert_eq!(value["valid"], true);
    }
}
