use std::sync::Arc;

use academics_core::domain::{AssociationId, Cohort};
use academics_core::forms::{CohortSelection, FormFields, TeacherProfileForm};
use tracing::info;

use super::WorkflowError;
use crate::repository::{
    NewTeacher, SubjectRecord, SubjectRepository, TeacherRecord, TeacherRepository,
};

#[derive(Debug, Clone)]
pub struct TeacherRegistered {
    pub teacher: TeacherRecord,
    pub associations: Vec<AssociationId>,
}

/// Two-step teacher registration. The cohort from step 1 travels in the
/// step 2 query string and only narrows the subjects offered there.
#[derive(Clone)]
pub struct TeacherRegistration {
    subjects: Arc<dyn SubjectRepository>,
    teachers: Arc<dyn TeacherRepository>,
}

impl TeacherRegistration {
    pub const STEP2_PATH: &'static str = "/create-teacher-step2/";

    pub fn new(subjects: Arc<dyn SubjectRepository>, teachers: Arc<dyn TeacherRepository>) -> Self {
        Self { subjects, teachers }
    }

    /// Step 1 submission: both values are required.
    pub fn select_cohort(&self, fields: &FormFields) -> Result<Cohort, WorkflowError> {
        Ok(CohortSelection::parse(fields)?)
    }

    /// Where step 1 sends the caller next.
    pub fn step2_location(cohort: Cohort) -> String {
        format!(
            "{}?dept={}&sem={}",
            Self::STEP2_PATH,
            cohort.department_id,
            cohort.semester.value()
        )
    }

    /// Subjects offered for selection in step 2. Without a cohort nothing is
    /// offered.
    pub async fn offered_subjects(
        &self,
        cohort: Option<Cohort>,
    ) -> Result<Vec<SubjectRecord>, WorkflowError> {
        match cohort {
            Some(cohort) => Ok(self.subjects.list_for_cohort(cohort).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Step 2 submission. Identifier collisions are left to the store.
    #[tracing::instrument(skip(self, fields))]
    pub async fn register(&self, fields: &FormFields) -> Result<TeacherRegistered, WorkflowError> {
        let form = TeacherProfileForm::parse(fields)?;

        let (teacher, associations) = self
            .teachers
            .create_with_subjects(
                NewTeacher {
                    employee_id: form.employee_id,
                    first_name: form.first_name,
                    last_name: form.last_name,
                    email: form.email,
                    phone: form.phone,
                    address: form.address,
                    profile_picture: form.profile_picture,
                    salary: form.salary,
                    designation: form.designation,
                },
                &form.subjects,
            )
            .await?;

        info!(
            teacher_id = %teacher.id,
            designation = teacher.designation.code(),
            subjects = associations.len(),
            "teacher registered"
        );

        Ok(TeacherRegistered {
            teacher,
            associations,
        })
    }
}
