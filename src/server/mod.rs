//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the student records
//! service. The backend uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: validation, duplicate checks,
//!   status lifecycle, deletion guard and statistics
//! - **Data Layer** (`data/`) - The `StudentStore` persistence port and its SeaORM
//!   repository
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Validator** (`validator`) - Pure field checks shared by the service
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params and calls the service
//! 3. **Service** validates input, applies business rules, calls the store
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validator;
