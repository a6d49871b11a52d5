//! Diesel implementation of the user repository traits.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        types::UserId,
        user::{NewUser, UpdateUser, User, UserFilter},
    },
    models::user::{NewUser as DbNewUser, UpdateUser as DbUpdateUser, User as DbUser},
    repository::{
        DieselRepository, UserListQuery, UserReader, UserWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::users,
};

diesel::define_sql_function!(fn lower(x: Text) -> Text);

/// Builds a `LIKE` pattern matching `needle` anywhere, with wildcards in the
/// needle itself escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Shared predicate construction for list and count.
fn filtered(filter: &UserFilter) -> users::BoxedQuery<'static, Sqlite> {
    let mut query = users::table.into_boxed();

    if let Some(first_name) = &filter.first_name {
        query = query.filter(
            lower(users::first_name)
                .like(contains_pattern(first_name))
                .escape('\\'),
        );
    }

    if let Some(last_name) = &filter.last_name {
        query = query.filter(
            lower(users::last_name)
                .like(contains_pattern(last_name))
                .escape('\\'),
        );
    }

    query
}

/// SQLite takes `i64` for `LIMIT`; anything larger already means "no limit".
fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: &UserId) -> RepositoryResult<User> {
        let mut conn = self.conn()?;

        let user = users::table
            .find(id.as_str())
            .select(DbUser::as_select())
            .first::<DbUser>(&mut conn)
            .optional()?;

        match user {
            Some(user) => Ok(User::try_from(user)?),
            None => {
                log::warn!("No user found with ID: {id}");
                Err(RepositoryError::NotFound(id.clone()))
            }
        }
    }

    fn list_users(&self, query: UserListQuery) -> RepositoryResult<Vec<User>> {
        let mut conn = self.conn()?;

        let mut items = filtered(&query.filter)
            .order(users::created_at.desc())
            .then_order_by(users::id.desc());

        if let Some(pagination) = query.pagination {
            // No table holds more than `i64::MAX` rows.
            let Ok(offset) = i64::try_from(pagination.offset) else {
                return Ok(Vec::new());
            };
            items = items.offset(offset).limit(sql_limit(pagination.limit));
        }

        let users = items
            .select(DbUser::as_select())
            .load::<DbUser>(&mut conn)
            .map_err(|e| {
                log::error!("Failed to list users: {e}");
                e
            })?;

        users
            .into_iter()
            .map(|user| User::try_from(user).map_err(RepositoryError::from))
            .collect()
    }

    fn count_users(&self, filter: &UserFilter) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(filter)
            .count()
            .get_result(&mut conn)
            .map_err(|e| {
                log::error!("Failed to count users: {e}");
                e
            })?;

        usize::try_from(total)
            .map_err(|_| RepositoryError::Unexpected(format!("negative row count {total}")))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        let mut conn = self.conn()?;

        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .returning(DbUser::as_returning())
            .get_result::<DbUser>(&mut conn)
            .map_err(|e| {
                log::error!("Failed to create user: {e}");
                e
            })?;

        log::info!("User created with id: {}", new_user.id);
        Ok(User::try_from(created)?)
    }

    fn update_user(&self, id: &UserId, updates: &UpdateUser) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let changeset = DbUpdateUser::new(updates, Utc::now().naive_utc());
        let affected = diesel::update(users::table.find(id.as_str()))
            .set(&changeset)
            .execute(&mut conn)
            .map_err(|e| {
                log::error!("Failed to update user {id}: {e}");
                e
            })?;

        if affected == 0 {
            log::warn!("No user found with ID: {id}");
            return Err(RepositoryError::NotFound(id.clone()));
        }

        Ok(())
    }

    fn delete_user(&self, id: &UserId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let affected = diesel::delete(users::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(|e| {
                log::error!("Failed to delete user {id}: {e}");
                e
            })?;

        if affected == 0 {
            log::warn!("No user found with ID: {id}");
            return Err(RepositoryError::NotFound(id.clone()));
        }

        log::info!("User deleted with id: {id}");
        Ok(())
    }
}
