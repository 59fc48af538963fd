use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// GPA as submitted by a client.
///
/// Forms commonly post numbers as strings, so both a JSON number and a numeric
/// string are accepted; the validator decides whether the value is usable.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum GpaValue {
    Number(f64),
    Text(String),
}

impl GpaValue {
    /// Whether the value is an empty or whitespace-only string.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
    pub gpa: f64,
    pub status: String,
}

/// Payload for `POST /api/students`.
///
/// Every field is optional at the serde level so that a missing field is reported
/// as a validation error naming it rather than as a deserialization failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateStudentDto {
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub gpa: Option<GpaValue>,
    pub status: Option<String>,
}

/// Payload for `PUT /api/students/{id}`.
///
/// Only identity fields are accepted; `gpa` and `status` have dedicated endpoints
/// and are ignored if a client sends them here.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateStudentDto {
    pub student_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateGpaDto {
    #[schema(value_type = Option<f64>)]
    pub gpa: Option<GpaValue>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateStatusDto {
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentStatisticsDto {
    pub active: u64,
    pub graduated: u64,
    pub suspended: u64,
    pub withdrawn: u64,
    pub total: u64,
    #[serde(rename = "averageGPA")]
    pub average_gpa: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentListDto {
    pub students: Vec<StudentDto>,
    pub statistics: StudentStatisticsDto,
}
