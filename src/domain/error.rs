use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::JsonPayloadError;

use validator::ValidationErrors;

use serde::Serialize;
use utoipa::ToSchema;

use serde_json::{Map, Value};

use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                message: message.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };

    ($name:ident, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                message: $default.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };
}

#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    pub message: String,
    pub code: u16,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static BAD_REQUEST: &str = "The server would not process the request due to something the server considered to be a client error";
    pub static UNSUPPORTED_MEDIA_TYPE: &str = "Content-Type must be application/json";
    pub static INTERNAL_ERROR: &str = "The server encountered an unexpected condition that prevented it from fulfilling the request";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(BadRequest, StatusCode::BAD_REQUEST);
    static_error!(UnsupportedMediaType, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    // 2. Errors with Default Message
    static_error!(InternalError, StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR);

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            code: self.code,
            message: self.message,
            trace: Some(message.to_owned()),
        }
    }

    pub fn example_400() -> AppError {
        AppError::BadRequest(message::BAD_REQUEST)
    }

    pub fn example_415() -> AppError {
        AppError::UnsupportedMediaType(message::UNSUPPORTED_MEDIA_TYPE)
    }

    pub fn example_500() -> AppError {
        AppError::InternalError()
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code, trace = ?self.trace, "{}", self.message);
        }

        HttpResponse::build(status)
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let map = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors.iter().map(ToString::to_string).collect::<Vec<_>>();
                (field.to_string(), Value::String(messages.join("; ")))
            })
            .collect::<Map<_, _>>();

        AppError::BadRequest(Value::Object(map).to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        match error {
            JsonPayloadError::ContentType => {
                AppError::UnsupportedMediaType(message::UNSUPPORTED_MEDIA_TYPE)
            }
            _ => AppError::BadRequest(error.to_string()),
        }
    }
}
