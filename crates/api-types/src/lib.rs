//! Page contexts and response bodies shared by the server and its front end.
//!
//! GET pages serialize one of these contexts; the front end renders it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// One-shot message shown on the next page the caller reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentView {
    pub id: i32,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectView {
    pub id: i32,
    pub name: String,
    pub semester: u8,
    pub department_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignationView {
    pub code: String,
    pub label: String,
}

/// Step 1 of either wizard: pick a department and a semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortStepPage {
    pub departments: Vec<DepartmentView>,
    pub semesters: Vec<u8>,
    #[serde(default)]
    pub messages: Vec<FlashMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfileStepPage {
    pub department: DepartmentView,
    pub semester: u8,
    #[serde(default)]
    pub messages: Vec<FlashMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherProfileStepPage {
    pub dept_id: Option<i32>,
    pub semester: Option<u8>,
    pub subjects: Vec<SubjectView>,
    pub designations: Vec<DesignationView>,
    #[serde(default)]
    pub messages: Vec<FlashMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfileView {
    pub id: i32,
    pub enrollment_no: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    /// `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
    pub date_joined: String,
    pub department: DepartmentView,
    pub semester: u8,
    pub subjects: Vec<SubjectView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSummary {
    pub id: i32,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub designation: DesignationView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherListPage {
    pub teachers: Vec<TeacherSummary>,
    #[serde(default)]
    pub messages: Vec<FlashMessage>,
}

/// A subject taught by a teacher, with the subject-wide metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationView {
    pub id: i32,
    pub subject: SubjectView,
    pub average_marks: f64,
    pub average_attendance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfileView {
    pub id: i32,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    pub salary: Option<f64>,
    pub designation: DesignationView,
    pub date_joined: String,
    pub subjects: Vec<AssociationView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentInfoPage {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarksView {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub marks_obtained: f64,
    pub max_marks: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceView {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    /// `YYYY-MM-DD`
    pub date: String,
    pub present: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_ok_payload() {
        let response = HealthCheckResponse::ok();
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn flash_level_serializes_lowercase() {
        let json = serde_json::to_string(&FlashMessage::error("Email already exists."))
            .expect("serialize flash message");

        assert_eq!(json, r#"{"level":"error","text":"Email already exists."}"#);
    }

    #[test]
    fn page_messages_default_to_empty() {
        let page: CohortStepPage =
            serde_json::from_str(r#"{"departments":[],"semesters":[1,2]}"#)
                .expect("deserialize step page");

        assert!(page.messages.is_empty());
        assert_eq!(page.semesters, vec![1, 2]);
    }
}
