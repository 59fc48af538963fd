//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible, unique defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//!
//! let graduate = factory::student::StudentFactory::new(&db)
//!     .status("graduated")
//!     .gpa(3.75)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

pub use student::{create_student, create_student_with_status};
