//! Student domain models and parameters.
//!
//! Provides the student domain model, its status lifecycle, and the parameter types
//! passed from controllers to the service layer and from the service layer to the
//! persistence port.

use std::fmt;

use crate::{
    model::student::{
        CreateStudentDto, GpaValue, StudentDto, StudentListDto, StudentStatisticsDto,
        UpdateStudentDto,
    },
    server::error::{internal::InternalError, AppError},
};

/// Enrollment status of a student.
///
/// `Withdrawn` is terminal: once reached, the status can never change again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentStatus {
    Active,
    Graduated,
    Suspended,
    Withdrawn,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 4] = [
        StudentStatus::Active,
        StudentStatus::Graduated,
        StudentStatus::Suspended,
        StudentStatus::Withdrawn,
    ];

    /// Lowercase name used in JSON payloads and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Graduated => "graduated",
            Self::Suspended => "suspended",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Parses a status name, ignoring case and surrounding whitespace.
    ///
    /// # Returns
    /// - `Some(StudentStatus)` - Recognized status
    /// - `None` - Value is not one of the four status names
    pub fn from_name(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
    }

    /// Whether no further status transition is permitted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Withdrawn)
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted student record.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Identifier assigned by the persistence layer on creation.
    pub id: i32,
    /// Unique institutional code of the student.
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique contact email.
    pub email: String,
    /// One of the recognized majors.
    pub major: String,
    /// Grade point average in `[0.0, 4.0]`.
    pub gpa: f64,
    pub status: StudentStatus,
}

impl Student {
    /// Converts the student domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            student_code: self.student_code,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            major: self.major,
            gpa: self.gpa,
            status: self.status.to_string(),
        }
    }

    /// Converts an entity model to a student domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Student)` - The converted student domain model
    /// - `Err(AppError::InternalErr(InvalidStoredStatus))` - The stored status is not
    ///   one of the recognized values
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, AppError> {
        let status = StudentStatus::from_name(&entity.status).ok_or_else(|| {
            InternalError::InvalidStoredStatus {
                id: entity.id,
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            student_code: entity.student_code,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            major: entity.major,
            gpa: entity.gpa,
            status,
        })
    }
}

/// A fully validated student ready to be inserted, defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
    pub gpa: f64,
    pub status: StudentStatus,
}

/// Validated identity fields written by a full update.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentIdentity {
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
}

/// Optional filters for listing students. `None` means "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    pub major: Option<String>,
    pub status: Option<StudentStatus>,
}

/// Raw, unvalidated input for creating a student.
#[derive(Debug, Clone, Default)]
pub struct CreateStudentParams {
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<GpaValue>,
    pub status: Option<String>,
}

impl CreateStudentParams {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            student_code: dto.student_code,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            major: dto.major,
            gpa: dto.gpa,
            status: dto.status,
        }
    }
}

/// Raw, unvalidated identity fields for a full update.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
}

impl UpdateStudentParams {
    pub fn from_dto(dto: UpdateStudentDto) -> Self {
        Self {
            student_code: dto.student_code,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            major: dto.major,
        }
    }
}

/// Aggregate counts and average GPA over a set of students.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentStatistics {
    pub active: u64,
    pub graduated: u64,
    pub suspended: u64,
    pub withdrawn: u64,
    pub total: u64,
    /// Mean GPA rounded to two decimals, `0.0` when no GPA is available.
    pub average_gpa: f64,
}

impl StudentStatistics {
    pub fn into_dto(self) -> StudentStatisticsDto {
        StudentStatisticsDto {
            active: self.active,
            graduated: self.graduated,
            suspended: self.suspended,
            withdrawn: self.withdrawn,
            total: self.total,
            average_gpa: self.average_gpa,
        }
    }
}

/// Result of a filtered listing: the matching students and their statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentListing {
    pub students: Vec<Student>,
    pub statistics: StudentStatistics,
}

impl StudentListing {
    pub fn into_dto(self) -> StudentListDto {
        StudentListDto {
            students: self.students.into_iter().map(Student::into_dto).collect(),
            statistics: self.statistics.into_dto(),
        }
    }
}
