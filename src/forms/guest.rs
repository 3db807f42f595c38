use super::{FormErrors, collect, required};
use serde::Deserialize;
use validator::Validate;

/// Guest creation form.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct GuestForm {
    #[validate(custom(function = "required"))]
    pub name: String,
    #[validate(custom(function = "required"), email(message = "Invalid email address."))]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub category: String,
}

impl GuestForm {
    pub fn clean(&self) -> Result<NewGuest, FormErrors> {
        collect(self.validate()).into_result(NewGuest {
            name: self.name.clone(),
            email: self.email.clone(),
            category: self.category.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::forms::{EMAIL_MESSAGE, REQUIRED_MESSAGE};

    #[test]
    fn test_guest_form() {
        let form = GuestForm {
            name: "Bea".to_string(),
            email: "bea@example.com".to_string(),
            category: "family".to_string(),
        };
        let guest = form.clean().unwrap();
        assert_eq!(guest.name, "Bea");
        assert_eq!(guest.category, "family");

        let errors = GuestForm {
            email: "bea".to_string(),
            category: String::new(),
            ..form
        }
        .clean()
        .unwrap_err();
        assert_eq!(errors.get("email"), Some(EMAIL_MESSAGE));
        assert_eq!(errors.get("category"), Some(REQUIRED_MESSAGE));
        assert!(!errors.contains("name"));
    }
}
