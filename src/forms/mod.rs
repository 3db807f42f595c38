//! Form binding and validation.
//!
//! Each submitted HTML form has a struct that deserializes from the urlencoded
//! body and declares its field constraints with `validator`. A form's `clean`
//! method runs those constraints plus any parsing the field needs and yields
//! either a typed input for the `core` layer or a [`FormErrors`] map that the
//! page renders next to each field.

/// Registration and login forms
pub mod auth;
/// Expense creation form
pub mod expense;
/// Guest creation form
pub mod guest;
/// Task creation form
pub mod task;
/// Vendor creation form
pub mod vendor;

pub use auth::{Credentials, LoginForm, NewUser, RegistrationForm};
pub use expense::{ExpenseForm, NewExpense};
pub use guest::{GuestForm, NewGuest};
pub use task::{NewTask, TaskForm};
pub use vendor::{NewVendor, VendorForm};

use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

/// Shown for a missing or whitespace-only value.
pub const REQUIRED_MESSAGE: &str = "This field is required.";
/// Shown for a value that is not a plausible email address.
pub const EMAIL_MESSAGE: &str = "Invalid email address.";

/// Field name to error message, one message per field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    /// Records an error for `field` unless one is already present.
    ///
    /// The first failure on a field is the one worth showing; later checks
    /// usually fail as a consequence of it.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Error message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `value` when no errors were recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = Self::default();
        for (field, list) in errors.field_errors() {
            // A missing value trumps every other complaint about the same field.
            let chosen = list
                .iter()
                .find(|e| e.code == "required")
                .or_else(|| list.first());
            if let Some(error) = chosen {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                form_errors.add(field.to_string(), message);
            }
        }
        form_errors
    }
}

/// Converts the outcome of a derived `validate()` call into [`FormErrors`].
pub(crate) fn collect(result: Result<(), ValidationErrors>) -> FormErrors {
    result.map_or_else(FormErrors::from, |()| FormErrors::default())
}

/// Presence check: rejects empty and whitespace-only values.
pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed(REQUIRED_MESSAGE));
        return Err(error);
    }
    Ok(())
}
