use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// A persisted user record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A user about to be inserted. Identifier and timestamp are assigned by the
/// caller so the repository stores exactly what it receives.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
}

impl NewUser {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: UserId::generate(),
            first_name,
            last_name,
            email,
            phone,
            created_at,
        }
    }
}

/// Sparse set of changes for an existing user. `None` leaves the stored
/// value untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Case-insensitive substring constraints applied to list and count queries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserFilter {
    /// Builds a filter where empty strings impose no constraint.
    #[must_use]
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name: first_name.filter(|s| !s.is_empty()),
            last_name: last_name.filter(|s| !s.is_empty()),
        }
    }
}
