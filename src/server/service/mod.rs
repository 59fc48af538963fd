//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls behind the persistence port
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod student;

#[cfg(test)]
mod test;
