use thiserror::Error;

/// Internal issues with stored data or the codebase indicating unexpected behavior
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored student row carries a status outside the recognized set.
    ///
    /// Every write goes through the validator, so this indicates the row was
    /// modified outside the application. Results in a 500 Internal Server Error
    /// with a generic message returned to client.
    #[error("Student id={id} has unrecognized stored status '{value}'")]
    InvalidStoredStatus {
        /// Id of the offending row
        id: i32,
        /// The stored status value
        value: String,
    },
}
