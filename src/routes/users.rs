use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::Deserialize;

use crate::domain::user::UserFilter;
use crate::dto::envelope::Envelope;
use crate::dto::users::ListUsersQuery;
use crate::forms::users::{CreateUserForm, UpdateUserForm};
use crate::pagination::DefaultLimit;
use crate::repository::DieselRepository;
use crate::routes::error::ApiResult;
use crate::services::users as users_service;

/// Raw query string of `GET /users`. Page and limit stay strings so that a
/// malformed value degrades to the default instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

fn positive(raw: Option<&str>) -> Option<usize> {
    raw?.parse::<usize>().ok().filter(|value| *value > 0)
}

impl From<ListUsersParams> for ListUsersQuery {
    fn from(params: ListUsersParams) -> Self {
        Self {
            page: positive(params.page.as_deref()),
            limit: positive(params.limit.as_deref()),
            filter: UserFilter::new(params.first_name, params.last_name),
        }
    }
}

#[post("/users")]
pub async fn create_user(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateUserForm>,
) -> ApiResult<HttpResponse> {
    let user = web::block(move || users_service::create_user(repo.get_ref(), form)).await??;

    Ok(Envelope::success(StatusCode::CREATED, Some(user)).into_response())
}

#[get("/users")]
pub async fn list_users(
    repo: web::Data<DieselRepository>,
    default_limit: web::Data<DefaultLimit>,
    web::Query(params): web::Query<ListUsersParams>,
) -> ApiResult<HttpResponse> {
    let query = ListUsersQuery::from(params);
    let default_limit = *default_limit.get_ref();

    let page =
        web::block(move || users_service::list_users(repo.get_ref(), query, default_limit))
            .await??;

    Ok(Envelope::success(StatusCode::OK, Some(page.users))
        .with_meta(page.meta)
        .into_response())
}

#[get("/users/{id}")]
pub async fn get_user(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let user = web::block(move || users_service::get_user(repo.get_ref(), &id)).await??;

    Ok(Envelope::success(StatusCode::OK, Some(user)).into_response())
}

#[patch("/users/{id}")]
pub async fn update_user(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
    web::Json(form): web::Json<UpdateUserForm>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    web::block(move || users_service::update_user(repo.get_ref(), &id, form)).await??;

    Ok(Envelope::<()>::success(StatusCode::OK, None).into_response())
}

#[delete("/users/{id}")]
pub async fn delete_user(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    web::block(move || users_service::delete_user(repo.get_ref(), &id)).await??;

    Ok(Envelope::<()>::success(StatusCode::OK, None).into_response())
}
