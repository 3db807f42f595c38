//! Registration and login forms.

use super::{FormErrors, collect, required};
use serde::Deserialize;
use validator::Validate;

/// Sign-up form as submitted by the browser.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct RegistrationForm {
    #[validate(
        custom(function = "required"),
        length(min = 2, max = 20, message = "Field must be between 2 and 20 characters long.")
    )]
    pub username: String,
    #[validate(custom(function = "required"), email(message = "Invalid email address."))]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub password: String,
    #[validate(
        custom(function = "required"),
        must_match(other = "password", message = "Field must be equal to password.")
    )]
    pub confirm_password: String,
}

/// A registration that passed every field check. Uniqueness is checked
/// against the database by `core::user::register`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationForm {
    /// Runs the field constraints.
    pub fn clean(&self) -> Result<NewUser, FormErrors> {
        collect(self.validate()).into_result(NewUser {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Login form as submitted by the browser.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct LoginForm {
    #[validate(custom(function = "required"), email(message = "Invalid email address."))]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub password: String,
    /// HTML checkboxes are only sent when ticked, with an arbitrary value.
    pub remember: Option<String>,
}

/// Login input ready to be checked against stored credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    pub fn clean(&self) -> Result<Credentials, FormErrors> {
        collect(self.validate()).into_result(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            remember: self.remember.is_some(),
        })
    }
}
