use crate::domain::error::AppError;
use actix_web::dev::{JsonBody, Payload};
use actix_web::{FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use mime::Mime;
use serde::de::DeserializeOwned;
use validator::Validate;

const PAYLOAD_LIMIT: usize = 32 * 1024;

/// Request body deserialized from JSON and checked with `Validate`.
///
/// Malformed JSON and failed validation are 400, any content type other than
/// exactly `application/json` is 415.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn is_json(mime: Mime) -> bool {
    mime == mime::APPLICATION_JSON
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = JsonBody::<T>::new(req, payload, Some(&is_json), true).limit(PAYLOAD_LIMIT);

        Box::pin(async move {
            let value = body.await?;
            value.validate()?;
            Ok::<_, AppError>(Json(value))
        })
    }
}
