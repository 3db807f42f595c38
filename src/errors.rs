use crate::forms::FormErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Password hashing error: {message}")]
    PasswordHash { message: String },

    #[error("Form validation failed on {} field(s)", .errors.len())]
    Validation { errors: FormErrors },
}

impl Error {
    /// Wraps a single field message as a validation failure.
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = FormErrors::default();
        errors.add(field, message);
        Self::Validation { errors }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
