use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        types::UserId,
        user::{NewUser, UpdateUser, User, UserFilter},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod user;

/// Window of rows to return from a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub filter: UserFilter,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new(filter: UserFilter) -> Self {
        Self {
            filter,
            pagination: None,
        }
    }

    pub fn paginate(mut self, offset: usize, limit: usize) -> Self {
        self.pagination = Some(Pagination { offset, limit });
        self
    }
}

pub trait UserReader {
    fn get_user_by_id(&self, id: &UserId) -> RepositoryResult<User>;
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<Vec<User>>;
    fn count_users(&self, filter: &UserFilter) -> RepositoryResult<usize>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, id: &UserId, updates: &UpdateUser) -> RepositoryResult<()>;
    fn delete_user(&self, id: &UserId) -> RepositoryResult<()>;
}

/// Diesel-backed repository sharing a single connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
