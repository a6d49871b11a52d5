//! Uniform JSON wrapper returned by every endpoint.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Serialize, Serializer};

use crate::pagination::Meta;

fn status_code<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

/// `{status, data?, error?, meta?}` body. `status` is also the HTTP status
/// of the response built by [`Envelope::into_response`].
#[derive(Debug, Serialize, PartialEq)]
pub struct Envelope<T: Serialize> {
    #[serde(serialize_with = "status_code")]
    pub status: StatusCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(status: StatusCode, data: Option<T>) -> Self {
        Self {
            status,
            data,
            error: None,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self)
    }
}

impl Envelope<()> {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            error: Some(message.into()),
            meta: None,
        }
    }
}
