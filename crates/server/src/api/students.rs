//! Student registration wizard and student records.

use std::sync::Arc;

use academics_api_types::{CohortStepPage, FlashMessage, StudentProfileStepPage, SubjectView};
use academics_core::domain::{Semester, StudentId};
use academics_core::forms::FormFields;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use tracing::debug;

use super::session::CallerSession;
use super::{AppError, AppState, views};
use crate::workflow::WorkflowError;

pub const STEP1_PATH: &str = "/student/step1/";
pub const STEP2_PATH: &str = "/student/step2/";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(STEP1_PATH, get(step1_page).post(submit_step1))
        .route(STEP2_PATH, get(step2_page).post(submit_step2))
        .route("/student/{id}/", get(profile).delete(delete_student))
        .route("/student/{id}/eligible-subjects/", get(eligible_subjects))
}

pub(super) async fn cohort_step_page(
    state: &AppState,
    messages: Vec<FlashMessage>,
) -> Result<CohortStepPage, AppError> {
    let departments = state.departments.list().await?;
    Ok(CohortStepPage {
        departments: departments.iter().map(views::department).collect(),
        semesters: Semester::all().map(Semester::value).collect(),
        messages,
    })
}

async fn step1_page(
    State(state): State<Arc<AppState>>,
    mut session: CallerSession,
) -> Result<Response, AppError> {
    let messages = session.data.take_flash();
    let page = cohort_step_page(&state, messages).await?;
    let cookie = session.commit(&state.sessions).await;
    Ok((cookie, Json(page)).into_response())
}

async fn submit_step1(
    State(state): State<Arc<AppState>>,
    mut session: CallerSession,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = FormFields::from(pairs);
    let location = match state
        .student_registration
        .select_cohort(&mut session.data.registration, &fields)
    {
        Ok(_) => STEP2_PATH,
        Err(err) => {
            debug!(error = %err, "student step 1 rejected");
            session
                .data
                .flash(FlashMessage::error(WorkflowError::MissingPrerequisite.to_string()));
            STEP1_PATH
        }
    };
    let cookie = session.commit(&state.sessions).await;
    (cookie, Redirect::to(location)).into_response()
}

async fn step2_page(
    State(state): State<Arc<AppState>>,
    mut session: CallerSession,
) -> Result<Response, AppError> {
    match state
        .student_registration
        .profile_step(&session.data.registration)
        .await
    {
        Ok(step) => {
            let page = StudentProfileStepPage {
                department: views::department(&step.department),
                semester: step.semester.value(),
                messages: session.data.take_flash(),
            };
            let cookie = session.commit(&state.sessions).await;
            Ok((cookie, Json(page)).into_response())
        }
        Err(WorkflowError::MissingPrerequisite) => {
            session.data.flash(FlashMessage::error(
                WorkflowError::MissingPrerequisite.to_string(),
            ));
            let cookie = session.commit(&state.sessions).await;
            Ok((cookie, Redirect::to(STEP1_PATH)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

async fn submit_step2(
    State(state): State<Arc<AppState>>,
    mut session: CallerSession,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let fields = FormFields::from(pairs);
    let location = match state
        .student_registration
        .register(&mut session.data.registration, &fields)
        .await
    {
        Ok(registered) => {
            session
                .data
                .flash(FlashMessage::success(registered.success_message()));
            STEP1_PATH
        }
        Err(WorkflowError::MissingPrerequisite) => {
            session.data.flash(FlashMessage::error(
                WorkflowError::MissingPrerequisite.to_string(),
            ));
            STEP1_PATH
        }
        Err(
            err @ (WorkflowError::DuplicateIdentifier(_)
            | WorkflowError::Validation(_)
            | WorkflowError::UnknownReference(_)),
        ) => {
            session.data.flash(FlashMessage::error(err.to_string()));
            STEP2_PATH
        }
        Err(err) => return Err(err.into()),
    };
    let cookie = session.commit(&state.sessions).await;
    Ok((cookie, Redirect::to(location)).into_response())
}

async fn profile(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i32>,
) -> Result<Response, AppError> {
    let student_id = StudentId::new(student_id);
    let student = state
        .students
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| AppError::not_found("student", student_id))?;
    let department = state
        .departments
        .find_by_id(student.department_id)
        .await?
        .ok_or_else(|| AppError::not_found("department", student.department_id))?;
    let subjects = state.students.subjects_of(student_id).await?;

    Ok(Json(views::student_profile(&student, &department, &subjects)).into_response())
}

async fn eligible_subjects(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i32>,
) -> Result<Json<Vec<SubjectView>>, AppError> {
    let student_id = StudentId::new(student_id);
    let student = state
        .students
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| AppError::not_found("student", student_id))?;
    let subjects = state.subjects.list_for_cohort(student.cohort()).await?;

    Ok(Json(subjects.iter().map(views::subject).collect()))
}

async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let student_id = StudentId::new(student_id);
    if state.students.delete(student_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("student", student_id))
    }
}
