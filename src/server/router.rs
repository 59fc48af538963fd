use axum::{
    routing::{get, patch},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        student::{
            CreateStudentDto, StudentDto, StudentListDto, StudentStatisticsDto, UpdateGpaDto,
            UpdateStatusDto, UpdateStudentDto,
        },
    },
    server::{
        controller::{
            health::{self, get_health},
            student::{
                self, create_student, delete_student, get_student, get_students,
                update_student, update_student_gpa, update_student_status,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Records API"),
    paths(
        health::get_health,
        student::get_students,
        student::get_student,
        student::create_student,
        student::update_student,
        student::update_student_gpa,
        student::update_student_status,
        student::delete_student,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        MessageDto,
        StudentDto,
        StudentListDto,
        StudentStatisticsDto,
        CreateStudentDto,
        UpdateStudentDto,
        UpdateGpaDto,
        UpdateStatusDto,
    )),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "student", description = "Student records management"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(get_health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/students", get(get_students).post(create_student))
        .route(
            "/api/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/api/students/{id}/gpa", patch(update_student_gpa))
        .route("/api/students/{id}/status", patch(update_student_status))
}

/// Builds the complete application with state, request tracing and CORS applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
