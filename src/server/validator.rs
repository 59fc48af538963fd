//! Field validation for student payloads.
//!
//! Every check is pure and synchronous and reports the first problem it finds as a
//! [`ValidationFailure`] naming the offending field. Checks that parse their input
//! (`validate_id`, `validate_status`, `validate_gpa`) return the parsed value so
//! callers never parse twice.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{
    model::student::GpaValue,
    server::model::student::{CreateStudentParams, StudentStatus, UpdateStudentParams},
};

/// Majors a student may be enrolled in.
pub const RECOGNIZED_MAJORS: [&str; 5] = [
    "Computer Science",
    "Information Technology",
    "Software Engineering",
    "Data Science",
    "Computer Engineering",
];

pub const MIN_GPA: f64 = 0.0;
pub const MAX_GPA: f64 = 4.0;

const STUDENT_CODE_MAX_LEN: usize = 32;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

static STUDENT_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("student code pattern is a valid regex")
});

/// A single field that failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationFailure {
    /// Name of the failing field as it appears in request payloads.
    pub field: &'static str,
    /// Human readable description of the problem.
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("{} is required", field))
    }
}

/// Parses a path id as a positive integer.
pub fn validate_id(raw: &str) -> Result<i32, ValidationFailure> {
    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationFailure::new(
            "id",
            format!("id must be a positive integer, got '{}'", raw),
        )),
    }
}

pub fn validate_major(major: &str) -> Result<(), ValidationFailure> {
    if major.trim().is_empty() {
        return Err(ValidationFailure::required("major"));
    }

    if !RECOGNIZED_MAJORS.contains(&major) {
        return Err(ValidationFailure::new(
            "major",
            format!("major must be one of: {}", RECOGNIZED_MAJORS.join(", ")),
        ));
    }

    Ok(())
}

/// Parses a status name, case-insensitively.
pub fn validate_status(status: &str) -> Result<StudentStatus, ValidationFailure> {
    StudentStatus::from_name(status).ok_or_else(|| {
        let allowed: Vec<&str> = StudentStatus::ALL.iter().map(|s| s.as_str()).collect();
        ValidationFailure::new(
            "status",
            format!("status must be one of: {}", allowed.join(", ")),
        )
    })
}

/// Parses a GPA and checks it lies within `[0.0, 4.0]`.
pub fn validate_gpa(gpa: &GpaValue) -> Result<f64, ValidationFailure> {
    let value = match gpa {
        GpaValue::Number(value) => *value,
        GpaValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationFailure::new("gpa", "gpa must be a number"))?,
    };

    if !value.is_finite() || !(MIN_GPA..=MAX_GPA).contains(&value) {
        return Err(ValidationFailure::new(
            "gpa",
            format!("gpa must be between {:.1} and {:.1}", MIN_GPA, MAX_GPA),
        ));
    }

    Ok(value)
}

/// Checks a person name is not blank. `field_label` names the field in the failure.
pub fn validate_name(name: &str, field_label: &'static str) -> Result<(), ValidationFailure> {
    if name.trim().is_empty() {
        return Err(ValidationFailure::required(field_label));
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationFailure> {
    if email.trim().is_empty() {
        return Err(ValidationFailure::required("email"));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationFailure::new(
            "email",
            format!("email '{}' is not a valid email address", email),
        ));
    }

    Ok(())
}

pub fn validate_student_code(code: &str) -> Result<(), ValidationFailure> {
    if code.trim().is_empty() {
        return Err(ValidationFailure::required("student_code"));
    }

    if code.len() > STUDENT_CODE_MAX_LEN || !STUDENT_CODE_PATTERN.is_match(code) {
        return Err(ValidationFailure::new(
            "student_code",
            format!(
                "student_code must be at most {} letters, digits, '-' or '_'",
                STUDENT_CODE_MAX_LEN
            ),
        ));
    }

    Ok(())
}

/// Validates a create payload.
///
/// All identity fields are required. `gpa` and `status` are optional; when present
/// and not blank they must be valid on their own.
pub fn validate_create_student(params: &CreateStudentParams) -> Result<(), ValidationFailure> {
    validate_identity(
        &params.student_code,
        &params.first_name,
        &params.last_name,
        &params.email,
        &params.major,
    )?;

    if let Some(gpa) = params.gpa.as_ref().filter(|gpa| !gpa.is_blank()) {
        validate_gpa(gpa)?;
    }

    if let Some(status) = params.status.as_deref().filter(|s| !s.trim().is_empty()) {
        validate_status(status)?;
    }

    Ok(())
}

/// Validates a full-update payload. Every identity field is required.
pub fn validate_update_student(params: &UpdateStudentParams) -> Result<(), ValidationFailure> {
    validate_identity(
        &params.student_code,
        &params.first_name,
        &params.last_name,
        &params.email,
        &params.major,
    )
}

fn validate_identity(
    student_code: &Option<String>,
    first_name: &Option<String>,
    last_name: &Option<String>,
    email: &Option<String>,
    major: &Option<String>,
) -> Result<(), ValidationFailure> {
    validate_student_code(required(student_code, "student_code")?)?;
    validate_name(required(first_name, "first_name")?, "first_name")?;
    validate_name(required(last_name, "last_name")?, "last_name")?;
    validate_email(required(email, "email")?)?;
    validate_major(required(major, "major")?)?;
    Ok(())
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ValidationFailure> {
    value
        .as_deref()
        .ok_or_else(|| ValidationFailure::required(field))
}
