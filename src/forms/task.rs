use super::{FormErrors, collect, required};
use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

/// The only deadline format the form accepts.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Task creation form.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct TaskForm {
    #[validate(custom(function = "required"))]
    pub title: String,
    #[validate(custom(function = "required"))]
    pub description: String,
    #[validate(custom(function = "required"))]
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub deadline: NaiveDateTime,
}

impl TaskForm {
    pub fn clean(&self) -> Result<NewTask, FormErrors> {
        let mut errors = collect(self.validate());

        let deadline = if errors.contains("deadline") {
            None
        } else {
            NaiveDateTime::parse_from_str(self.deadline.trim(), DEADLINE_FORMAT).ok()
        };

        match deadline {
            Some(deadline) => errors.into_result(NewTask {
                title: self.title.clone(),
                description: self.description.clone(),
                deadline,
            }),
            None => {
                errors.add("deadline", "Not a valid datetime value.");
                Err(errors)
            }
        }
    }
}
