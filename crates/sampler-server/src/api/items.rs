//! Item endpoints: path parameters, form validation, derived values

use actix_web::{Responder, Scope, get, http::StatusCode, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use sampler_common::SamplerError;
use sampler_common::error::{PARAMETER_VALIDATE_ERROR, RESOURCE_NOT_FOUND};

use crate::api::metrics::METRICS;
use crate::model::{ApiResult, AppState, DEFAULT_TAX_RATE};
use crate::service::items::Item;

#[derive(Debug, Deserialize)]
pub struct CreateFormData {
    pub name: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RateParam {
    pub rate: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub id: u64,
    pub price: f64,
    pub rate: f64,
    pub price_with_tax: f64,
}

#[get("/{id}")]
pub async fn get_item(data: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let id = path.into_inner();

    match data.items.get(id) {
        Some(item) => ApiResult::<Item>::http_success(item),
        None => ApiResult::<String>::http_response(
            StatusCode::NOT_FOUND.as_u16(),
            RESOURCE_NOT_FOUND.code,
            "Item not found".to_string(),
            SamplerError::ItemNotExist(id).to_string(),
        ),
    }
}

#[get("")]
pub async fn list_items(data: web::Data<AppState>) -> impl Responder {
    ApiResult::<Vec<Item>>::http_success(data.items.list())
}

#[post("")]
pub async fn create_item(
    data: web::Data<AppState>,
    form: web::Form<CreateFormData>,
) -> impl Responder {
    let name = form.name.clone().unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return ApiResult::http_param_missing("name");
    }

    let price_raw = form.price.clone().unwrap_or_default().trim().to_string();
    if price_raw.is_empty() {
        return ApiResult::http_param_missing("price");
    }

    let price: f64 = match price_raw.parse() {
        Ok(price) => price,
        Err(_) => {
            return ApiResult::<String>::http_response(
                StatusCode::BAD_REQUEST.as_u16(),
                PARAMETER_VALIDATE_ERROR.code,
                "illegal price".to_string(),
                format!("price [{}] is not a number", price_raw),
            );
        }
    };

    if !price.is_finite() || price < 0.0 {
        return ApiResult::<String>::http_response(
            StatusCode::BAD_REQUEST.as_u16(),
            PARAMETER_VALIDATE_ERROR.code,
            "illegal price".to_string(),
            format!("price [{}] must be a non-negative number", price_raw),
        );
    }

    let item = data.items.create(name, price);
    METRICS.inc_items_created();
    info!(id = item.id, name = %item.name, "item created");

    ApiResult::<Item>::http_success(item)
}

#[get("/{id}/price")]
pub async fn item_price(
    data: web::Data<AppState>,
    path: web::Path<u64>,
    params: web::Query<RateParam>,
) -> impl Responder {
    let id = path.into_inner();

    let rate_raw = params.rate.clone().unwrap_or_default().trim().to_string();
    let rate: f64 = if rate_raw.is_empty() {
        DEFAULT_TAX_RATE
    } else {
        match rate_raw.parse() {
            Ok(rate) => rate,
            Err(_) => {
                return ApiResult::<String>::http_response(
                    StatusCode::BAD_REQUEST.as_u16(),
                    PARAMETER_VALIDATE_ERROR.code,
                    "illegal rate".to_string(),
                    format!("rate [{}] is not a number", rate_raw),
                );
            }
        }
    };

    if !rate.is_finite() || rate < 0.0 {
        return ApiResult::<String>::http_response(
            StatusCode::BAD_REQUEST.as_u16(),
            PARAMETER_VALIDATE_ERROR.code,
            "illegal rate".to_string(),
            format!("rate [{}] must be a non-negative number", rate_raw),
        );
    }

    match data.items.get(id) {
        Some(item) => ApiResult::<PriceQuote>::http_success(PriceQuote {
            id: item.id,
            price: item.price,
            rate,
            price_with_tax: item.price_with_tax(rate),
        }),
        None => ApiResult::<String>::http_response(
            StatusCode::NOT_FOUND.as_u16(),
            RESOURCE_NOT_FOUND.code,
            "Item not found".to_string(),
            SamplerError::ItemNotExist(id).to_string(),
        ),
    }
}

pub fn routes() -> Scope {
    web::scope("/items")
        .service(list_items)
        .service(create_item)
        .service(get_item)
        .service(item_price)
}
