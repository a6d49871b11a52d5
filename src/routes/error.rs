//! Mapping from service failures to HTTP envelopes.

use actix_web::error::{BlockingError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::dto::envelope::Envelope;
use crate::services::ServiceError;

/// Error kinds the transport distinguishes when choosing a status code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Persistence(String),

    #[error("{0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Status code for each error kind.
pub fn status_for(error: &ApiError) -> StatusCode {
    match error {
        ApiError::Validation(_) | ApiError::Decode(_) => StatusCode::BAD_REQUEST,
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Envelope body describing `error`.
pub fn envelope_for(error: &ApiError) -> Envelope<()> {
    Envelope::failure(status_for(error), error.to_string())
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::FirstNameRequired | ServiceError::LastNameRequired => {
                ApiError::Validation(err.to_string())
            }
            ServiceError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ServiceError::Persistence(_) => ApiError::Persistence(err.to_string()),
        }
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        ApiError::Persistence(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Persistence(message) = self {
            log::error!("Request failed: {message}");
        }
        envelope_for(self).into_response()
    }
}

/// Turns a rejected JSON body into a decode error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Decode(format!("invalid request format: '{err}'")).into()
}

/// Turns an undecodable query string into a decode error envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Decode(format!("invalid query string: '{err}'")).into()
}
