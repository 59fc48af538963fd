//! Student data repository for database operations.
//!
//! This module defines the `StudentStore` persistence port the service layer depends on,
//! and `StudentRepository`, its SeaORM implementation. Entity models are converted to
//! domain models at this boundary.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait, SqlErr,
};

use crate::server::{
    error::{student::StudentError, AppError},
    model::student::{NewStudent, Student, StudentFilter, StudentIdentity, StudentStatus},
};

/// Optional lookups a store supports.
///
/// The service skips the duplicate check backed by a lookup the store does not
/// support instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCapabilities {
    /// `find_by_student_code` returns real results.
    pub student_code_lookup: bool,
    /// `find_by_email` returns real results.
    pub email_lookup: bool,
}

impl StoreCapabilities {
    pub const ALL: Self = Self {
        student_code_lookup: true,
        email_lookup: true,
    };
}

/// Durable storage of student records.
///
/// Implementations only persist and fetch; every business rule lives in
/// `StudentService`. The duplicate lookups are optional and default to "not found";
/// a store that implements them advertises so through `capabilities()`.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Optional lookups this store supports. Defaults to none.
    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities::default()
    }

    /// Fetches students matching the filter, ordered by id.
    async fn find_all(&self, filter: &StudentFilter) -> Result<Vec<Student>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, AppError>;

    async fn find_by_student_code(&self, _student_code: &str) -> Result<Option<Student>, AppError> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<Student>, AppError> {
        Ok(None)
    }

    /// Inserts a student and returns it with its assigned id.
    async fn create(&self, student: NewStudent) -> Result<Student, AppError>;

    /// Replaces the identity fields of an existing student.
    async fn update(&self, id: i32, identity: StudentIdentity) -> Result<Student, AppError>;

    async fn update_gpa(&self, id: i32, gpa: f64) -> Result<Student, AppError>;

    async fn update_status(&self, id: i32, status: StudentStatus) -> Result<Student, AppError>;

    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

/// Repository providing database operations for student records.
///
/// Supports both duplicate lookups. Unique indexes on `student_code` and `email`
/// back up the service's duplicate checks: a write that loses a race surfaces as
/// `StudentError::Duplicate`.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one_by(
        &self,
        column: entity::student::Column,
        value: &str,
    ) -> Result<Option<Student>, AppError> {
        entity::prelude::Student::find()
            .filter(column.eq(value))
            .one(self.db)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    /// Applies a partial update and converts the returned row.
    async fn save(&self, id: i32, model: entity::student::ActiveModel) -> Result<Student, AppError> {
        let entity = model.update(self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => StudentError::NotFound(id).into(),
            err => write_error(err),
        })?;

        Student::from_entity(entity)
    }
}

#[async_trait]
impl<'a> StudentStore for StudentRepository<'a> {
    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities::ALL
    }

    async fn find_all(&self, filter: &StudentFilter) -> Result<Vec<Student>, AppError> {
        let entities = entity::prelude::Student::find()
            .apply_if(filter.major.clone(), |query, major| {
                query.filter(entity::student::Column::Major.eq(major))
            })
            .apply_if(filter.status, |query, status| {
                query.filter(entity::student::Column::Status.eq(status.as_str()))
            })
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Student::from_entity).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    async fn find_by_student_code(&self, student_code: &str) -> Result<Option<Student>, AppError> {
        self.find_one_by(entity::student::Column::StudentCode, student_code)
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        self.find_one_by(entity::student::Column::Email, email).await
    }

    async fn create(&self, student: NewStudent) -> Result<Student, AppError> {
        let entity = entity::student::ActiveModel {
            student_code: ActiveValue::Set(student.student_code),
            first_name: ActiveValue::Set(student.first_name),
            last_name: ActiveValue::Set(student.last_name),
            email: ActiveValue::Set(student.email),
            major: ActiveValue::Set(student.major),
            gpa: ActiveValue::Set(student.gpa),
            status: ActiveValue::Set(student.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(write_error)?;

        Student::from_entity(entity)
    }

    async fn update(&self, id: i32, identity: StudentIdentity) -> Result<Student, AppError> {
        let model = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(id),
            student_code: ActiveValue::Set(identity.student_code),
            first_name: ActiveValue::Set(identity.first_name),
            last_name: ActiveValue::Set(identity.last_name),
            email: ActiveValue::Set(identity.email),
            major: ActiveValue::Set(identity.major),
            ..Default::default()
        };

        self.save(id, model).await
    }

    async fn update_gpa(&self, id: i32, gpa: f64) -> Result<Student, AppError> {
        let model = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(id),
            gpa: ActiveValue::Set(gpa),
            ..Default::default()
        };

        self.save(id, model).await
    }

    async fn update_status(&self, id: i32, status: StudentStatus) -> Result<Student, AppError> {
        let model = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        };

        self.save(id, model).await
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StudentError::NotFound(id).into());
        }

        Ok(())
    }
}

/// Maps a failed insert or update, turning unique index violations into conflicts.
fn write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => StudentError::Duplicate {
            field: duplicate_field(&detail),
        }
        .into(),
        _ => err.into(),
    }
}

/// Names the unique column mentioned in a constraint violation message.
fn duplicate_field(detail: &str) -> &'static str {
    if detail.contains("student_code") {
        "student_code"
    } else if detail.contains("email") {
        "email"
    } else {
        "student"
    }
}
