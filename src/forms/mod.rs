//! Request bodies decoded by the HTTP routes.

pub mod users;
