use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::validator::ValidationFailure};

/// Business-rule and validation failures raised by the student service.
#[derive(Error, Debug)]
pub enum StudentError {
    /// A field, filter, or payload failed validation.
    ///
    /// Results in a 400 Bad Request naming the failing field.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// No student exists with the requested id.
    ///
    /// Results in a 404 Not Found.
    #[error("Student id={0} not found")]
    NotFound(i32),

    /// Another student already uses this `student_code` or `email`.
    ///
    /// Results in a 409 Conflict.
    #[error("{field} already exists")]
    Duplicate {
        /// Name of the colliding field
        field: &'static str,
    },

    /// The student is withdrawn, which is a terminal status.
    ///
    /// Results in a 409 Conflict.
    #[error("Cannot change status of withdrawn student")]
    WithdrawnStatusLocked,

    /// Active students must change status before they can be deleted.
    ///
    /// Results in a 409 Conflict.
    #[error("Cannot delete active student. Change status first.")]
    ActiveDeletion,
}

impl StudentError {
    /// HTTP status code reported for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } | Self::WithdrawnStatusLocked | Self::ActiveDeletion => {
                StatusCode::CONFLICT
            }
        }
    }
}

/// Converts student errors into HTTP responses.
///
/// - `Validation` → 400 Bad Request with the failing field
/// - `NotFound` → 404 Not Found
/// - `Duplicate` / `WithdrawnStatusLocked` / `ActiveDeletion` → 409 Conflict
///
/// The message is always safe to show to the client.
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let field = match &self {
            Self::Validation(failure) => Some(failure.field.to_string()),
            Self::Duplicate { field } => Some(field.to_string()),
            _ => None,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
                field,
            }),
        )
            .into_response()
    }
}
