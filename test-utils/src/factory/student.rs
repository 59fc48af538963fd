//! Student factory for creating test student entities.
//!
//! This module provides factory methods for creating student rows with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .student_code("6501001")
///     .major("Data Science")
///     .status("suspended")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    student_code: String,
    first_name: String,
    last_name: String,
    email: String,
    major: String,
    gpa: f64,
    status: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - student_code: `"S{id}"` where id is auto-incremented
    /// - first_name: `"First{id}"`
    /// - last_name: `"Last{id}"`
    /// - email: `"student{id}@example.com"`
    /// - major: `"Computer Science"`
    /// - gpa: `3.0`
    /// - status: `"active"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            student_code: format!("S{}", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: format!("student{}@example.com", id),
            major: "Computer Science".to_string(),
            gpa: 3.0,
            status: "active".to_string(),
        }
    }

    pub fn student_code(mut self, student_code: impl Into<String>) -> Self {
        self.student_code = student_code.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    /// Sets the stored status string.
    ///
    /// The value is written as-is, so tests can also seed unrecognized statuses.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            student_code: ActiveValue::Set(self.student_code),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            major: ActiveValue::Set(self.major),
            gpa: ActiveValue::Set(self.gpa),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student with a specific status.
///
/// Shorthand for `StudentFactory::new(db).status(status).build().await`.
pub async fn create_student_with_status(
    db: &DatabaseConnection,
    status: impl Into<String>,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).status(status).build().await
}
