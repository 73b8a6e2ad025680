use std::sync::Arc;

use academics_core::domain::{Cohort, RegistrationContext, Semester};
use academics_core::forms::{CohortSelection, FormFields, StudentProfileForm};
use tracing::{info, warn};

use super::{DuplicateField, WorkflowError};
use crate::repository::{
    AccountRepository, DepartmentRecord, DepartmentRepository, NewStudent, StudentRecord,
    StudentRepository, SubjectRecord,
};

/// What step 2 shows: the cohort picked in step 1.
#[derive(Debug, Clone)]
pub struct StudentProfileStep {
    pub department: DepartmentRecord,
    pub semester: Semester,
}

#[derive(Debug, Clone)]
pub struct StudentRegistered {
    pub student: StudentRecord,
    /// Subjects assigned automatically from the student's cohort.
    pub subjects: Vec<SubjectRecord>,
}

impl StudentRegistered {
    pub fn success_message(&self) -> String {
        format!(
            "Student {} {} registered successfully with {} subjects.",
            self.student.first_name,
            self.student.last_name,
            self.subjects.len()
        )
    }
}

/// Two-step student registration.
///
/// Step 1 stores the cohort in the caller's [`RegistrationContext`]; step 2
/// requires it, creates the login account and the student, and enrolls the
/// student in every subject of the cohort.
#[derive(Clone)]
pub struct StudentRegistration {
    departments: Arc<dyn DepartmentRepository>,
    students: Arc<dyn StudentRepository>,
    accounts: Arc<dyn AccountRepository>,
}

impl StudentRegistration {
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        students: Arc<dyn StudentRepository>,
        accounts: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            departments,
            students,
            accounts,
        }
    }

    /// Step 1 submission. Only presence and shape of the two values are
    /// checked here.
    pub fn select_cohort(
        &self,
        context: &mut RegistrationContext,
        fields: &FormFields,
    ) -> Result<Cohort, WorkflowError> {
        let cohort = CohortSelection::parse(fields)?;
        context.select_cohort(cohort);
        info!(
            department_id = %cohort.department_id,
            semester = cohort.semester.value(),
            "student cohort selected"
        );
        Ok(cohort)
    }

    /// Step 2 page data.
    pub async fn profile_step(
        &self,
        context: &RegistrationContext,
    ) -> Result<StudentProfileStep, WorkflowError> {
        let cohort = context.cohort().ok_or(WorkflowError::MissingPrerequisite)?;
        let department = self.cohort_department(cohort).await?;

        Ok(StudentProfileStep {
            department,
            semester: cohort.semester,
        })
    }

    /// Step 2 submission. Success marks `context` complete; a failure
    /// leaves it awaiting step 2.
    #[tracing::instrument(skip(self, context, fields))]
    pub async fn register(
        &self,
        context: &mut RegistrationContext,
        fields: &FormFields,
    ) -> Result<StudentRegistered, WorkflowError> {
        let cohort = context.cohort().ok_or(WorkflowError::MissingPrerequisite)?;
        let result = self.register_in_cohort(cohort, fields).await;
        match &result {
            Ok(registered) => {
                context.complete();
                info!(
                    student_id = %registered.student.id,
                    subjects = registered.subjects.len(),
                    stage = ?context.stage(),
                    "student registered"
                );
            }
            Err(_) => context.select_cohort(cohort),
        }
        result
    }

    async fn register_in_cohort(
        &self,
        cohort: Cohort,
        fields: &FormFields,
    ) -> Result<StudentRegistered, WorkflowError> {
        self.cohort_department(cohort).await?;
        let form = StudentProfileForm::parse(fields)?;

        // Fast-path checks for a friendly message; the unique constraints
        // still decide when two submissions race.
        if self.students.enrollment_no_exists(&form.enrollment_no).await? {
            warn!(enrollment_no = %form.enrollment_no, "duplicate enrollment number");
            return Err(WorkflowError::DuplicateIdentifier(
                DuplicateField::EnrollmentNo,
            ));
        }
        if self.students.email_exists(&form.email).await?
            || self.accounts.username_exists(&form.email).await?
        {
            warn!(email = %form.email, "duplicate email");
            return Err(WorkflowError::DuplicateIdentifier(DuplicateField::Email));
        }

        let registered = self
            .students
            .register(NewStudent {
                enrollment_no: form.enrollment_no,
                first_name: form.first_name,
                last_name: form.last_name,
                email: form.email,
                password: form.password,
                phone: form.phone,
                address: form.address,
                profile_picture: form.profile_picture,
                date_of_birth: form.date_of_birth,
                cohort,
            })
            .await?;

        Ok(StudentRegistered {
            student: registered.student,
            subjects: registered.subjects,
        })
    }

    async fn cohort_department(&self, cohort: Cohort) -> Result<DepartmentRecord, WorkflowError> {
        self.departments
            .find_by_id(cohort.department_id)
            .await?
            .ok_or(WorkflowError::RecordNotFound {
                entity: "department",
                id: cohort.department_id.value(),
            })
    }
}
