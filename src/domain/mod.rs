//! Domain types exposed by the users service layer.

pub mod types;
pub mod user;
