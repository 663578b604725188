use std::sync::Arc;

use crate::api::error::{ApiResult, not_found};
use crate::api::middlewares::content_type::RequireJson;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, AccountPayloadDTO};

use actix_web::{
    HttpRequest, HttpResponse, delete, get,
    http::header,
    post, put,
    web::{Data as State, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create_account)
        .service(list_accounts)
        .service(read_account)
        .service(update_account)
        .service(delete_account);
}

#[utoipa::path(
    responses(
        (status = 201, body = AccountDTO, description = "Account Created",
            headers(("Location" = String, description = "URL of the new account"))),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[post("/accounts")]
pub async fn create_account(
    _: RequireJson,
    payload: Json<AccountPayloadDTO>,
    req: HttpRequest,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    tracing::info!("Request to create an Account");

    let account = account_service.create(payload.into_inner().into()).await?;

    let location = req
        .url_for("read_account", [account.id.to_string()])
        .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.to_string()))
        .json(AccountDTO::from(account)))
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<AccountDTO>, description = "All Accounts"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts")]
pub async fn list_accounts(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    tracing::info!("Request to list all Accounts");

    let accounts = account_service.all().await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO, description = "Account found"),
        (status = 404, description = "Account not found, the body is an empty array"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts/{id}")]
pub async fn read_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    tracing::info!("Request to read an Account");

    match account_service.find(id.into_inner()).await? {
        Some(account) => Ok(HttpResponse::Ok().json(AccountDTO::from(account))),
        None => Ok(not_found()),
    }
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO, description = "Account updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, description = "Account not found, the body is an empty array"),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[put("/accounts/{id}")]
pub async fn update_account(
    id: Path<i64>,
    payload: Result<Json<AccountPayloadDTO>, AppError>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    tracing::info!("Request to update an Account");

    let id = id.into_inner();

    // Existence is checked before the body is looked at.
    if account_service.find(id).await?.is_none() {
        return Ok(not_found());
    }

    match account_service
        .update(id, payload?.into_inner().into())
        .await?
    {
        Some(account) => Ok(HttpResponse::Ok().json(AccountDTO::from(account))),
        None => Ok(not_found()),
    }
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 204, description = "Account deleted, or it did not exist"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    tracing::info!("Request to delete an Account");

    account_service.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
