use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::student::GpaValue,
    server::{
        data::student::{StoreCapabilities, StudentRepository, StudentStore},
        error::{student::StudentError, AppError},
        model::student::{
            CreateStudentParams, NewStudent, Student, StudentFilter, StudentIdentity,
            StudentStatus, UpdateStudentParams,
        },
        service::student::{StudentService, STUDENT_DELETED_MESSAGE},
    },
};

mod delete;
mod update;
mod update_gpa;

/// Helper building a complete, valid create payload.
fn create_params(student_code: &str, email: &str) -> CreateStudentParams {
    CreateStudentParams {
        student_code: Some(student_code.to_string()),
        first_name: Some("Somchai".to_string()),
        last_name: Some("Jaidee".to_string()),
        email: Some(email.to_string()),
        major: Some("Computer Science".to_string()),
        gpa: None,
        status: None,
    }
}

/// Helper building a complete, valid full-update payload.
fn update_params(student_code: &str, email: &str) -> UpdateStudentParams {
    UpdateStudentParams {
        student_code: Some(student_code.to_string()),
        first_name: Some("Somying".to_string()),
        last_name: Some("Rakdee".to_string()),
        email: Some(email.to_string()),
        major: Some("Data Science".to_string()),
    }
}

/// Returns the student error kind carried by a failed result.
fn student_error<T: std::fmt::Debug>(result: Result<T, AppError>) -> StudentError {
    match result {
        Err(AppError::StudentErr(err)) => err,
        other => panic!("expected a student error, got {:?}", other),
    }
}

/// In-memory store without duplicate lookups, recording every write.
///
/// Clones share the same records, so a test can keep a handle after moving one
/// into the service.
#[derive(Clone)]
struct MemoryStore {
    students: Arc<Mutex<Vec<Student>>>,
    writes: Arc<Mutex<u32>>,
}

impl MemoryStore {
    fn new() -> Self {
        Self {
            students: Arc::new(Mutex::new(Vec::new())),
            writes: Arc::new(Mutex::new(0)),
        }
    }

    fn with_students(students: Vec<Student>) -> Self {
        let store = Self::new();
        *store.students.lock().unwrap() = students;
        store
    }

    fn writes(&self) -> u32 {
        *self.writes.lock().unwrap()
    }

    fn modify(&self, id: i32, apply: impl FnOnce(&mut Student)) -> Result<Student, AppError> {
        *self.writes.lock().unwrap() += 1;
        let mut students = self.students.lock().unwrap();
        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StudentError::NotFound(id))?;
        apply(student);
        Ok(student.clone())
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn find_all(&self, filter: &StudentFilter) -> Result<Vec<Student>, AppError> {
        let students = self.students.lock().unwrap();
        Ok(students
            .iter()
            .filter(|s| filter.major.as_ref().is_none_or(|m| &s.major == m))
            .filter(|s| filter.status.is_none_or(|status| s.status == status))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, student: NewStudent) -> Result<Student, AppError> {
        *self.writes.lock().unwrap() += 1;
        let mut students = self.students.lock().unwrap();
        let created = Student {
            id: students.iter().map(|s| s.id).max().unwrap_or(0) + 1,
            student_code: student.student_code,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            major: student.major,
            gpa: student.gpa,
            status: student.status,
        };
        students.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, identity: StudentIdentity) -> Result<Student, AppError> {
        self.modify(id, |s| {
            s.student_code = identity.student_code;
            s.first_name = identity.first_name;
            s.last_name = identity.last_name;
            s.email = identity.email;
            s.major = identity.major;
        })
    }

    async fn update_gpa(&self, id: i32, gpa: f64) -> Result<Student, AppError> {
        self.modify(id, |s| s.gpa = gpa)
    }

    async fn update_status(&self, id: i32, status: StudentStatus) -> Result<Student, AppError> {
        self.modify(id, |s| s.status = status)
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        *self.writes.lock().unwrap() += 1;
        self.students.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}

/// Helper building a domain student for the in-memory store.
fn memory_student(id: i32, status: StudentStatus) -> Student {
    Student::from_entity(test_utils::fixture::student::entity_with(id, status.as_str())).unwrap()
}
