//! Services implementing the user CRUD workflows.

use chrono::Utc;
use validator::Validate;

use crate::domain::types::UserId;
use crate::domain::user::{NewUser, UpdateUser, User, UserFilter};
use crate::dto::users::{ListUsersQuery, UsersPage};
use crate::forms::users::{CreateUserForm, UpdateUserForm};
use crate::pagination::{DefaultLimit, Meta};
use crate::repository::{UserListQuery, UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Maps name validation failures to their service errors, first name first.
fn check_names<F: Validate>(form: &F) -> ServiceResult<()> {
    let Err(errors) = form.validate() else {
        return Ok(());
    };
    let fields = errors.field_errors();
    if fields.contains_key("first_name") {
        return Err(ServiceError::FirstNameRequired);
    }
    if fields.contains_key("last_name") {
        return Err(ServiceError::LastNameRequired);
    }
    Ok(())
}

fn parse_id(id: &str) -> ServiceResult<UserId> {
    UserId::new(id).map_err(|_| ServiceError::NotFound(id.to_string()))
}

/// Validates the names and persists a new user with a fresh identifier.
pub fn create_user<R>(repo: &R, form: CreateUserForm) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    check_names(&form)?;

    let new_user = NewUser::new(
        form.first_name,
        form.last_name,
        form.email,
        form.phone,
        Utc::now().naive_utc(),
    );

    repo.create_user(&new_user).map_err(ServiceError::from)
}

/// Fetches a user by identifier.
pub fn get_user<R>(repo: &R, id: &str) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    let id = parse_id(id)?;
    repo.get_user_by_id(&id).map_err(ServiceError::from)
}

/// Returns the users matching `filter` within `[offset, offset + limit)`.
pub fn get_all_users<R>(
    repo: &R,
    filter: UserFilter,
    offset: usize,
    limit: usize,
) -> ServiceResult<Vec<User>>
where
    R: UserReader + ?Sized,
{
    repo.list_users(UserListQuery::new(filter).paginate(offset, limit))
        .map_err(ServiceError::from)
}

/// Counts the users matching `filter`.
pub fn count_users<R>(repo: &R, filter: &UserFilter) -> ServiceResult<usize>
where
    R: UserReader + ?Sized,
{
    repo.count_users(filter).map_err(ServiceError::from)
}

/// Loads one page of users along with the metadata describing it.
pub fn list_users<R>(
    repo: &R,
    query: ListUsersQuery,
    default_limit: DefaultLimit,
) -> ServiceResult<UsersPage>
where
    R: UserReader + ?Sized,
{
    let total = count_users(repo, &query.filter)?;
    let meta = Meta::new(query.page, query.limit, total, default_limit);
    let users = get_all_users(repo, query.filter, meta.offset(), meta.limit())?;

    Ok(UsersPage { users, meta })
}

/// Applies the supplied fields to an existing user.
pub fn update_user<R>(repo: &R, id: &str, form: UpdateUserForm) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    check_names(&form)?;

    let id = parse_id(id)?;
    let updates = UpdateUser::from(form);
    repo.update_user(&id, &updates).map_err(ServiceError::from)
}

/// Removes a user.
pub fn delete_user<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    let id = parse_id(id)?;
    repo.delete_user(&id).map_err(ServiceError::from)
}
