//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::types::UserId;
use crate::domain::user::{NewUser, UpdateUser, User, UserFilter};
use crate::repository::errors::RepositoryResult;
use crate::repository::{UserListQuery, UserReader, UserWriter};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: &UserId) -> RepositoryResult<User>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<Vec<User>>;
        fn count_users(&self, filter: &UserFilter) -> RepositoryResult<usize>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, id: &UserId, updates: &UpdateUser) -> RepositoryResult<()>;
        fn delete_user(&self, id: &UserId) -> RepositoryResult<()>;
    }
}
