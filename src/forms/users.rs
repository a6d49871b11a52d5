use serde::Deserialize;
use validator::Validate;

use crate::domain::user::UpdateUser;

#[derive(Debug, Default, Deserialize, Validate)]
/// JSON body accepted when creating a user. Missing fields decode as empty
/// strings so that absent names surface as validation errors.
pub struct CreateUserForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
/// JSON body accepted when patching a user. Omitted or `null` fields are left
/// unchanged.
pub struct UpdateUserForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<UpdateUserForm> for UpdateUser {
    fn from(form: UpdateUserForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone: form.phone,
        }
    }
}
