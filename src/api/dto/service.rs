use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthDTO {
    #[schema(examples("OK"))]
    pub status: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfoDTO {
    #[schema(examples("Account REST API Service"))]
    pub name: &'static str,
    #[schema(examples("1.0"))]
    pub version: &'static str,
}
