//! Student Records Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the student
//! records service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases, plus factories and fixtures for student rows.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts student rows with unique defaults
//! - **fixture**: In-memory entity models that never touch the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_student_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let db = test.db.as_ref().unwrap();
//!     let student = factory::create_student(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
