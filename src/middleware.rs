//! Cross-origin policy applied to every response.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse};

fn allow_cross_origin(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}

/// Adds permissive CORS headers and answers `OPTIONS` with an empty 200
/// without reaching the routes. Install with
/// [`actix_web::middleware::from_fn`].
pub async fn access_control(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let mut res = if req.method() == Method::OPTIONS {
        req.into_response(HttpResponse::Ok().finish())
            .map_into_right_body()
    } else {
        next.call(req).await?.map_into_left_body()
    };

    allow_cross_origin(res.headers_mut());
    Ok(res)
}
