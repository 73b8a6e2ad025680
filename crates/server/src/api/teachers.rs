//! Teacher registration wizard and teacher records.

use std::sync::Arc;

use academics_api_types::{FlashMessage, TeacherListPage, TeacherProfileStepPage};
use academics_core::domain::TeacherId;
use academics_core::forms::{CohortSelection, FormFields};
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::debug;

use super::session::CallerSession;
use super::students::cohort_step_page;
use super::{AppError, AppState, views};
use crate::workflow::{TeacherRegistration, WorkflowError};

pub const STEP1_PATH: &str = "/create-teacher-step1/";
pub const LIST_PATH: &str = "/teachers/";

const STEP1_MISSING: &str = "Please select department and semester.";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(STEP1_PATH, get(step1_page).post(submit_step1))
        .route(
            TeacherRegistration::STEP2_PATH,
            get(step2_page).post(submit_step2),
        )
        .route(LIST_PATH, get(list_teachers))
        .route("/teacher/{id}/", get(profile).delete(delete_teacher))
}

#[derive(Debug, Default, Deserialize)]
struct CohortQuery {
    dept: Option<String>,
    sem: Option<String>,
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

/// Invalid input re-renders step 1 with the message instead of redirecting.
async fn submit_step1(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let fields = FormFields::from(pairs);
    match state.teacher_registration.select_cohort(&fields) {
        Ok(cohort) => {
            Ok(Redirect::to(&TeacherRegistration::step2_location(cohort)).into_response())
        }
        Err(err) => {
            debug!(error = %err, "teacher step 1 rejected");
            let page = cohort_step_page(&state, vec![FlashMessage::error(STEP1_MISSING)]).await?;
            Ok(Json(page).into_response())
        }
    }
}

async fn step2_page(
    State(state): State<Arc<AppState>>,
    mut session: CallerSession,
    Query(query): Query<CohortQuery>,
) -> Result<Response, AppError> {
    let cohort = CohortSelection::from_query(query.dept.as_deref(), query.sem.as_deref());
    let subjects = state.teacher_registration.offered_subjects(cohort).await?;

    let page = TeacherProfileStepPage {
        dept_id: cohort.map(|cohort| cohort.department_id.value()),
        semester: cohort.map(|cohort| cohort.semester.value()),
        subjects: subjects.iter().map(views::subject).collect(),
        designations: views::designations(),
        messages: session.data.take_flash(),
    };
    let cookie = session.commit(&state.sessions).await;
    Ok((cookie, Json(page)).into_response())
}

async fn submit_step2(
    State(state): State<Arc<AppState>>,
    mut session: CallerSession,
    uri: Uri,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let fields = FormFields::from(pairs);
    let location = match state.teacher_registration.register(&fields).await {
        Ok(registered) => {
            session.data.flash(FlashMessage::success(format!(
                "Teacher {} {} created with {} subjects.",
                registered.teacher.first_name,
                registered.teacher.last_name,
                registered.associations.len()
            )));
            LIST_PATH.to_string()
        }
        Err(
            err @ (WorkflowError::DuplicateIdentifier(_)
            | WorkflowError::Validation(_)
            | WorkflowError::UnknownReference(_)),
        ) => {
            session.data.flash(FlashMessage::error(err.to_string()));
            uri.path_and_query()
                .map(|path| path.as_str().to_string())
                .unwrap_or_else(|| TeacherRegistration::STEP2_PATH.to_string())
        }
        Err(err) => return Err(err.into()),
    };
    let cookie = session.commit(&state.sessions).await;
    Ok((cookie, Redirect::to(&location)).into_response())
}

async fn list_teachers(
    State(state): State<Arc<AppState>>,
    mut session: CallerSession,
) -> Result<Response, AppError> {
    let teachers = state.teachers.list().await?;
    let page = TeacherListPage {
        teachers: teachers.iter().map(views::teacher_summary).collect(),
        messages: session.data.take_flash(),
    };
    let cookie = session.commit(&state.sessions).await;
    Ok((cookie, Json(page)).into_response())
}

async fn profile(
    State(state): State<Arc<AppState>>,
    Path(teacher_id): Path<i32>,
) -> Result<Response, AppError> {
    let teacher_id = TeacherId::new(teacher_id);
    let teacher = state
        .teachers
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| AppError::not_found("teacher", teacher_id))?;

    let associations = state.teachers.associations_of(teacher_id).await?;
    let mut subjects = Vec::with_capacity(associations.len());
    for association in &associations {
        let metrics = state.metrics.for_association(association).await?;
        subjects.push(views::association(association, metrics));
    }

    Ok(Json(views::teacher_profile(&teacher, subjects)).into_response())
}

async fn delete_teacher(
    State(state): State<Arc<AppState>>,
    Path(teacher_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let teacher_id = TeacherId::new(teacher_id);
    if state.teachers.delete(teacher_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("teacher", teacher_id))
    }
}
