use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{
            CreateStudentDto, StudentDto, StudentListDto, UpdateGpaDto, UpdateStatusDto,
            UpdateStudentDto,
        },
    },
    server::{
        data::student::StudentRepository,
        error::AppError,
        model::student::{CreateStudentParams, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Optional filters for the student listing.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentFilterParams {
    /// Only students enrolled in this major
    pub major: Option<String>,
    /// Only students with this status, case-insensitive
    pub status: Option<String>,
}

/// List students with statistics.
///
/// Returns every student matching the optional filters together with status counts
/// and the average GPA of the returned set. Blank filters are ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional `major` and `status` filters
///
/// # Returns
/// - `200 OK` - Students and statistics
/// - `400 Bad Request` - Unknown major or status filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentFilterParams),
    responses(
        (status = 200, description = "Successfully retrieved students", body = StudentListDto),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(params): Query<StudentFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let listing = service.get_all(params.major, params.status).await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Get a student by id.
///
/// # Returns
/// - `200 OK` - The student
/// - `400 Bad Request` - Id is not a positive integer
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a new student.
///
/// `gpa` defaults to `0.0` and `status` to `active` when omitted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student fields; identity fields are required
///
/// # Returns
/// - `201 Created` - Successfully created student
/// - `400 Bad Request` - Malformed JSON or invalid field
/// - `409 Conflict` - Student code or email already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 409, description = "Student code or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service
        .create(CreateStudentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Replace the identity fields of a student.
///
/// GPA and status are not changed by this endpoint.
///
/// # Returns
/// - `200 OK` - Updated student
/// - `400 Bad Request` - Invalid id, malformed JSON, or invalid field
/// - `404 Not Found` - No student with that id
/// - `409 Conflict` - New student code or email already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Student code or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service
        .update(&id, UpdateStudentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Set the GPA of a student.
///
/// # Returns
/// - `200 OK` - Updated student
/// - `400 Bad Request` - Invalid id, or GPA missing or outside `[0.0, 4.0]`
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/students/{id}/gpa",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = UpdateGpaDto,
    responses(
        (status = 200, description = "Successfully updated GPA", body = StudentDto),
        (status = 400, description = "Invalid GPA", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student_gpa(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateGpaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service.update_gpa(&id, payload.gpa).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Change the status of a student.
///
/// Withdrawn students can never change status. Requesting the current status
/// returns the student unchanged.
///
/// # Returns
/// - `200 OK` - Updated student
/// - `400 Bad Request` - Invalid id or unknown status
/// - `404 Not Found` - No student with that id
/// - `409 Conflict` - Student is withdrawn
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/students/{id}/status",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Successfully updated status", body = StudentDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Student is withdrawn", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = StudentService::new(StudentRepository::new(&state.db));

    let student = service.update_status(&id, payload.status).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// Only students that are no longer active can be deleted.
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `400 Bad Request` - Invalid id
/// - `404 Not Found` - No student with that id
/// - `409 Conflict` - Student is still active
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Student is still active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(StudentRepository::new(&state.db));

    let message = service.delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message.to_string(),
        }),
    ))
}
