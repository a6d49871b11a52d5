//! DTOs exchanged between the users routes and services.

use crate::domain::user::{User, UserFilter};
use crate::pagination::Meta;

/// Parameters accepted by the list operation. Page and limit are already
/// parsed; anything the client sent that is not a positive integer arrives
/// here as `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListUsersQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub filter: UserFilter,
}

/// One page of users together with its pagination metadata.
#[derive(Debug)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub meta: Meta,
}
