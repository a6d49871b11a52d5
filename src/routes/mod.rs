//! HTTP handlers and their registration.

use actix_web::web;

pub mod error;
pub mod users;

/// Registers the users endpoints and the JSON/query extractor settings that
/// turn malformed input into decode envelopes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(error::json_error_handler),
    )
    .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
    .service(users::create_user)
    .service(users::list_users)
    .service(users::get_user)
    .service(users::update_user)
    .service(users::delete_user);
}
