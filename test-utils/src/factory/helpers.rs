//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for seeding several rows at once.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::student::StudentFactory;

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// student code and email to prevent unique constraint collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one student per `(status, gpa)` pair.
///
/// All other fields use the factory defaults, so every row gets a unique
/// student code and email.
///
/// # Arguments
/// - `db` - Database connection
/// - `rows` - Status and GPA for each student, in insertion order
///
/// # Returns
/// - `Ok(Vec<entity::student::Model>)` - Created students in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_students(
    db: &DatabaseConnection,
    rows: &[(&str, f64)],
) -> Result<Vec<entity::student::Model>, DbErr> {
    let mut students = Vec::with_capacity(rows.len());
    for (status, gpa) in rows {
        let student = StudentFactory::new(db).status(*status).gpa(*gpa).build().await?;
        students.push(student);
    }
    Ok(students)
}
