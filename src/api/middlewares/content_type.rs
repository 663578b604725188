use crate::domain::error::{AppError, AppResult};
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use futures::future::{Ready, ready};
use mime::Mime;

/// Rejects the request with 415 unless its Content-Type header is exactly
/// `media_type`, parameters included.
pub fn check_content_type(req: &HttpRequest, media_type: &Mime) -> AppResult<()> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    match content_type {
        Some(content_type) if content_type == media_type.as_ref() => Ok(()),
        _ => {
            tracing::error!("Invalid Content-Type: {}", content_type.unwrap_or("None"));
            Err(AppError::UnsupportedMediaType(format!(
                "Content-Type must be {media_type}"
            )))
        }
    }
}

/// Extractor form of [`check_content_type`] for `application/json`. Place it
/// before the body extractor so the body is never parsed on mismatch.
#[derive(Debug)]
pub struct RequireJson;

impl FromRequest for RequireJson {
    type Error = AppError;
    type Future = Ready<Result<RequireJson, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(check_content_type(req, &mime::APPLICATION_JSON).map(|_| RequireJson))
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::StatusCode,
        test::{self, TestRequest},
        web,
    };
    use serde::Deserialize;

    use super::*;
    use rstest::*;

    #[derive(Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    async fn index(_: RequireJson) -> impl Responder {
        HttpResponse::new(StatusCode::OK)
    }

    async fn send_req(content_type: Option<&str>) -> StatusCode {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let mut req = TestRequest::post().uri("/index").set_payload("{}");

        if let Some(content_type) = content_type {
            req = req.insert_header((header::CONTENT_TYPE, content_type));
        }

        req.send_request(&app).await.status()
    }

    #[actix_web::test]
    async fn test_accepted_content_type() {
        assert_eq!(send_req(Some("application/json")).await, StatusCode::OK);
    }

    #[rstest]
    #[case::with_charset(Some("application/json; charset=utf-8"))]
    #[case::html(Some("text/html"))]
    #[case::typo(Some("test/html"))]
    #[case::garbage(Some("not a mime"))]
    #[case::missing(None)]
    #[actix_web::test]
    async fn test_rejected_content_type(#[case] content_type: Option<&str>) {
        assert_eq!(
            send_req(content_type).await,
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[actix_web::test]
    async fn test_rejection_message() {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let res = TestRequest::post()
            .uri("/index")
            .insert_header((header::CONTENT_TYPE, "text/html"))
            .send_request(&app)
            .await;

        let err: Error = test::read_body_json(res).await;

        assert_eq!(err.code, 415);
        assert_eq!(err.message, "Content-Type must be application/json");
    }
}
