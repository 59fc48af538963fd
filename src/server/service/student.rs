//! Student service for business logic.
//!
//! This module provides the `StudentService`, the single source of business rules for
//! student records. It validates input, prevents duplicate student codes and emails,
//! enforces the status lifecycle and the deletion guard, and computes listing
//! statistics. Storage is reached only through the injected `StudentStore`.

pub mod statistics;

use crate::{
    model::student::GpaValue,
    server::{
        data::student::StudentStore,
        error::{student::StudentError, AppError},
        model::student::{
            CreateStudentParams, NewStudent, Student, StudentFilter, StudentIdentity,
            StudentListing, StudentStatus, UpdateStudentParams,
        },
        validator::{self, ValidationFailure},
    },
};

use self::statistics::compute_statistics;

/// Acknowledgment returned after a successful delete.
pub const STUDENT_DELETED_MESSAGE: &str = "Student deleted successfully";

/// Service providing business logic for student management.
///
/// Holds no state of its own besides the store; construct one per request.
pub struct StudentService<S> {
    store: S,
}

impl<S: StudentStore> StudentService<S> {
    /// Creates a new StudentService over the given store.
    ///
    /// # Arguments
    /// - `store` - Persistence port used for every read and write
    ///
    /// # Returns
    /// - `StudentService` - New service instance
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists students with optional major and status filters.
    ///
    /// Empty or whitespace-only filters are treated as absent. Statistics are computed
    /// over the filtered set.
    ///
    /// # Arguments
    /// - `major` - Optional major filter, must be a recognized major when given
    /// - `status` - Optional status filter, case-insensitive
    ///
    /// # Returns
    /// - `Ok(StudentListing)` - Matching students and their statistics
    /// - `Err(AppError::StudentErr(Validation))` - A filter value is invalid
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        major: Option<String>,
        status: Option<String>,
    ) -> Result<StudentListing, AppError> {
        let major = major.filter(|m| !m.trim().is_empty());
        let status = status.filter(|s| !s.trim().is_empty());

        if let Some(major) = major.as_deref() {
            validator::validate_major(major)?;
        }
        let status = status
            .as_deref()
            .map(validator::validate_status)
            .transpose()?;

        let filter = StudentFilter { major, status };
        let students = self.store.find_all(&filter).await?;
        let statistics = compute_statistics(&students);

        tracing::debug!(
            "Listed {} students (major: {:?}, status: {:?})",
            statistics.total,
            filter.major,
            filter.status
        );

        Ok(StudentListing {
            students,
            statistics,
        })
    }

    /// Retrieves a student by id.
    ///
    /// # Returns
    /// - `Ok(Student)` - The student
    /// - `Err(AppError::StudentErr(Validation))` - `id` is not a positive integer
    /// - `Err(AppError::StudentErr(NotFound))` - No student with that id
    pub async fn get_by_id(&self, id: &str) -> Result<Student, AppError> {
        let id = validator::validate_id(id)?;
        self.find_existing(id).await
    }

    /// Creates a new student.
    ///
    /// Duplicate student codes and emails are rejected before anything is written.
    /// `gpa` defaults to `0.0` and `status` to `active` when absent or blank.
    ///
    /// # Returns
    /// - `Ok(Student)` - Created student with its assigned id
    /// - `Err(AppError::StudentErr(Validation))` - Payload failed validation
    /// - `Err(AppError::StudentErr(Duplicate))` - Student code or email already in use
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        validator::validate_create_student(&params)?;

        let CreateStudentParams {
            student_code,
            first_name,
            last_name,
            email,
            major,
            gpa,
            status,
        } = params;

        // Presence was checked by the validator; the fallbacks are never hit.
        let student_code = student_code.unwrap_or_default();
        let email = email.unwrap_or_default();

        self.ensure_student_code_available(&student_code).await?;
        self.ensure_email_available(&email).await?;

        let gpa = gpa
            .filter(|gpa| !gpa.is_blank())
            .unwrap_or(GpaValue::Number(0.0));
        let status = status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| StudentStatus::Active.as_str().to_string());

        let new_student = NewStudent {
            student_code,
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email,
            major: major.unwrap_or_default(),
            gpa: validator::validate_gpa(&gpa)?,
            status: validator::validate_status(&status)?,
        };

        let student = self.store.create(new_student).await?;

        tracing::info!(
            "Created student id={} ({})",
            student.id,
            student.student_code
        );

        Ok(student)
    }

    /// Replaces the identity fields of a student.
    ///
    /// GPA and status are never touched here; they have dedicated operations.
    /// Duplicate checks only run for a student code or email that actually changes.
    ///
    /// # Returns
    /// - `Ok(Student)` - Updated student
    /// - `Err(AppError::StudentErr(Validation))` - Invalid id or payload
    /// - `Err(AppError::StudentErr(NotFound))` - No student with that id
    /// - `Err(AppError::StudentErr(Duplicate))` - New code or email already in use
    pub async fn update(&self, id: &str, params: UpdateStudentParams) -> Result<Student, AppError> {
        let id = validator::validate_id(id)?;
        let existing = self.find_existing(id).await?;

        validator::validate_update_student(&params)?;

        let identity = StudentIdentity {
            student_code: params.student_code.unwrap_or_default(),
            first_name: params.first_name.unwrap_or_default(),
            last_name: params.last_name.unwrap_or_default(),
            email: params.email.unwrap_or_default(),
            major: params.major.unwrap_or_default(),
        };

        if identity.student_code != existing.student_code {
            self.ensure_student_code_available(&identity.student_code)
                .await?;
        }
        if identity.email != existing.email {
            self.ensure_email_available(&identity.email).await?;
        }

        let student = self.store.update(id, identity).await?;

        tracing::info!("Updated student id={}", id);

        Ok(student)
    }

    /// Sets the GPA of a student.
    ///
    /// # Returns
    /// - `Ok(Student)` - Updated student
    /// - `Err(AppError::StudentErr(Validation))` - Invalid id, or GPA missing or out of range
    /// - `Err(AppError::StudentErr(NotFound))` - No student with that id
    pub async fn update_gpa(&self, id: &str, gpa: Option<GpaValue>) -> Result<Student, AppError> {
        let id = validator::validate_id(id)?;
        let gpa = gpa.ok_or_else(|| ValidationFailure::required("gpa"))?;
        let gpa = validator::validate_gpa(&gpa)?;

        self.find_existing(id).await?;

        let student = self.store.update_gpa(id, gpa).await?;

        tracing::info!("Updated GPA of student id={} to {:.2}", id, gpa);

        Ok(student)
    }

    /// Moves a student to a new status.
    ///
    /// Withdrawn students can never change status. Requesting the current status is a
    /// no-op that returns the unchanged record.
    ///
    /// # Returns
    /// - `Ok(Student)` - Updated, or unchanged, student
    /// - `Err(AppError::StudentErr(Validation))` - Invalid id or status
    /// - `Err(AppError::StudentErr(NotFound))` - No student with that id
    /// - `Err(AppError::StudentErr(WithdrawnStatusLocked))` - Student is withdrawn
    pub async fn update_status(
        &self,
        id: &str,
        status: Option<String>,
    ) -> Result<Student, AppError> {
        let id = validator::validate_id(id)?;
        let status = status.ok_or_else(|| ValidationFailure::required("status"))?;
        let status = validator::validate_status(&status)?;

        let existing = self.find_existing(id).await?;

        if existing.status.is_terminal() {
            tracing::warn!(
                "Rejected status change of withdrawn student id={} to {}",
                id,
                status
            );
            return Err(StudentError::WithdrawnStatusLocked.into());
        }

        if existing.status == status {
            return Ok(existing);
        }

        let student = self.store.update_status(id, status).await?;

        tracing::info!(
            "Changed status of student id={} from {} to {}",
            id,
            existing.status,
            status
        );

        Ok(student)
    }

    /// Deletes a student that is no longer active.
    ///
    /// # Returns
    /// - `Ok(&str)` - Success acknowledgment message
    /// - `Err(AppError::StudentErr(Validation))` - Invalid id
    /// - `Err(AppError::StudentErr(NotFound))` - No student with that id
    /// - `Err(AppError::StudentErr(ActiveDeletion))` - Student is still active
    pub async fn delete(&self, id: &str) -> Result<&'static str, AppError> {
        let id = validator::validate_id(id)?;
        let existing = self.find_existing(id).await?;

        if existing.status == StudentStatus::Active {
            tracing::warn!("Rejected deletion of active student id={}", id);
            return Err(StudentError::ActiveDeletion.into());
        }

        self.store.delete(id).await?;

        tracing::info!("Deleted student id={} ({})", id, existing.student_code);

        Ok(STUDENT_DELETED_MESSAGE)
    }

    async fn find_existing(&self, id: i32) -> Result<Student, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| StudentError::NotFound(id).into())
    }

    async fn ensure_student_code_available(&self, student_code: &str) -> Result<(), AppError> {
        if !self.store.capabilities().student_code_lookup {
            return Ok(());
        }

        match self.store.find_by_student_code(student_code).await? {
            Some(_) => Err(StudentError::Duplicate {
                field: "student_code",
            }
            .into()),
            None => Ok(()),
        }
    }

    async fn ensure_email_available(&self, email: &str) -> Result<(), AppError> {
        if !self.store.capabilities().email_lookup {
            return Ok(());
        }

        match self.store.find_by_email(email).await? {
            Some(_) => Err(StudentError::Duplicate { field: "email" }.into()),
            None => Ok(()),
        }
    }
}
