use actix_web::{HttpResponse, get};
use utoipa_actix_web::service_config::ServiceConfig;

use crate::api::dto::service::{HealthDTO, ServiceInfoDTO};

pub const SERVICE_NAME: &str = "Account REST API Service";
pub const SERVICE_VERSION: &str = "1.0";

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(health).service(index);
}

#[utoipa::path(
    responses((status = 200, body = HealthDTO, description = "Service is up")),
    tag = "Service",
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthDTO { status: "OK" })
}

#[utoipa::path(
    responses((status = 200, body = ServiceInfoDTO, description = "Service metadata")),
    tag = "Service",
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfoDTO {
        name: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}
