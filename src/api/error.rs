use actix_web::HttpResponse;
use serde_json::json;

use crate::domain::error::AppResult;

pub type ApiResult = AppResult<HttpResponse>;

/// A missing account is answered with 404 and an empty JSON array rather
/// than an error object.
pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!([]))
}
