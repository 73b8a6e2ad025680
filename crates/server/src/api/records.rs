//! Department, subject, marks and attendance records.

use std::sync::Arc;

use academics_api_types::{AttendanceView, DepartmentView, MarksView, SubjectView};
use academics_core::domain::{DepartmentId, Semester};
use academics_core::forms::{AttendanceForm, DepartmentForm, FormFields, MarksForm, SubjectForm};
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use serde::Deserialize;
use tracing::info;

use super::{AppError, AppState, views};
use crate::repository::{NewAttendance, NewDepartment, NewMarks, NewSubject, SubjectFilter};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/departments/", get(list_departments).post(create_department))
        .route("/departments/{id}/", delete(delete_department))
        .route("/subjects/", get(list_subjects).post(create_subject))
        .route("/marks/", post(record_marks))
        .route("/attendance/", post(record_attendance))
}

#[derive(Debug, Default, Deserialize)]
struct SubjectQuery {
    department: Option<String>,
    semester: Option<String>,
}

impl SubjectQuery {
    fn into_filter(self) -> Result<SubjectFilter, AppError> {
        let department_id = match non_blank(self.department) {
            Some(raw) => Some(
                raw.parse::<DepartmentId>()
                    .map_err(|_| AppError::bad_request(format!("invalid department: {raw}")))?,
            ),
            None => None,
        };
        let semester = match non_blank(self.semester) {
            Some(raw) => Some(
                raw.parse::<Semester>()
                    .map_err(|err| AppError::bad_request(err.to_string()))?,
            ),
            None => None,
        };
        Ok(SubjectFilter {
            department_id,
            semester,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DepartmentView>>, AppError> {
    let departments = state.departments.list().await?;
    Ok(Json(departments.iter().map(views::department).collect()))
}

async fn create_department(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<DepartmentView>), AppError> {
    let form = DepartmentForm::parse(&FormFields::from(pairs))?;
    let department = state
        .departments
        .create(NewDepartment {
            code: form.code,
            name: form.name,
        })
        .await?;

    info!(department_id = %department.id, code = %department.code, "department created");
    Ok((StatusCode::CREATED, Json(views::department(&department))))
}

async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let department_id = DepartmentId::new(department_id);
    if state.departments.delete(department_id).await? {
        info!(department_id = %department_id, "department deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("department", department_id))
    }
}

async fn list_subjects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<Vec<SubjectView>>, AppError> {
    let subjects = state.subjects.list(query.into_filter()?).await?;
    Ok(Json(subjects.iter().map(views::subject).collect()))
}

async fn create_subject(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<SubjectView>), AppError> {
    let form = SubjectForm::parse(&FormFields::from(pairs))?;
    let subject = state
        .subjects
        .create(NewSubject {
            name: form.name,
            semester: form.semester,
            department_id: form.department_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(views::subject(&subject))))
}

async fn record_marks(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<MarksView>), AppError> {
    let form = MarksForm::parse(&FormFields::from(pairs))?;
    let marks = state
        .marks
        .create(NewMarks {
            student_id: form.student_id,
            subject_id: form.subject_id,
            marks: form.marks,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(views::marks(&marks))))
}

async fn record_attendance(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<AttendanceView>), AppError> {
    let form = AttendanceForm::parse(&FormFields::from(pairs))?;
    let attendance = state
        .attendance
        .create(NewAttendance {
            student_id: form.student_id,
            subject_id: form.subject_id,
            date: form.date,
            present: form.present,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(views::attendance(&attendance))))
}
