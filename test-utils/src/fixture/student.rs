//! Student fixtures for creating in-memory test data.

use entity::student;

/// Default test student code.
pub const DEFAULT_STUDENT_CODE: &str = "6501001";

/// Default test first name.
pub const DEFAULT_FIRST_NAME: &str = "Somchai";

/// Default test last name.
pub const DEFAULT_LAST_NAME: &str = "Jaidee";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "somchai.j@example.com";

/// Default test major.
pub const DEFAULT_MAJOR: &str = "Computer Science";

/// Default test GPA.
pub const DEFAULT_GPA: f64 = 3.25;

/// Default test status.
pub const DEFAULT_STATUS: &str = "active";

/// Creates a student entity model with default values.
///
/// This function creates an in-memory student entity without inserting into the database.
///
/// # Default Values
/// - id: `1`
/// - student_code: `"6501001"`
/// - first_name: `"Somchai"`
/// - last_name: `"Jaidee"`
/// - email: `"somchai.j@example.com"`
/// - major: `"Computer Science"`
/// - gpa: `3.25`
/// - status: `"active"`
///
/// # Returns
/// - `student::Model` - In-memory student entity
pub fn entity() -> student::Model {
    student::Model {
        id: 1,
        student_code: DEFAULT_STUDENT_CODE.to_string(),
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        major: DEFAULT_MAJOR.to_string(),
        gpa: DEFAULT_GPA,
        status: DEFAULT_STATUS.to_string(),
    }
}

/// Creates a student entity model with the given id and status.
///
/// The student code and email are derived from the id so that several
/// fixtures can coexist in one collection.
pub fn entity_with(id: i32, status: &str) -> student::Model {
    student::Model {
        id,
        student_code: format!("65010{:02}", id),
        email: format!("student{}@example.com", id),
        status: status.to_string(),
        ..entity()
    }
}
