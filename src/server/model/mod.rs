//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry raw request
//! input from controllers into the service layer, where it is validated.

pub mod student;
