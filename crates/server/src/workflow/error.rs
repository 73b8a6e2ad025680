use std::fmt;

use academics_core::forms::FormError;
use thiserror::Error;

use crate::repository::StoreError;

/// Which identifier collided with an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    EnrollmentNo,
    Email,
    EmployeeId,
    DepartmentCode,
    Other,
}

impl DuplicateField {
    /// Best-effort classification of a store uniqueness violation by the
    /// column named in the database message.
    pub fn from_violation(detail: &str) -> Self {
        let detail = detail.to_ascii_lowercase();
        if detail.contains("enrollment_no") {
            Self::EnrollmentNo
        } else if detail.contains("employee_id") {
            Self::EmployeeId
        } else if detail.contains("email") || detail.contains("username") {
            Self::Email
        } else if detail.contains("department.code") || detail.contains("department_code") {
            Self::DepartmentCode
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EnrollmentNo => "Enrollment number already exists.",
            Self::Email => "Email already exists.",
            Self::EmployeeId => "Employee id already exists.",
            Self::DepartmentCode => "Department code already exists.",
            Self::Other => "Record already exists.",
        })
    }
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Please select department and semester first.")]
    MissingPrerequisite,

    #[error("{0}")]
    DuplicateIdentifier(DuplicateField),

    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("{entity} {id} not found")]
    RecordNotFound { entity: &'static str, id: i32 },

    #[error("Selected record does not exist: {0}")]
    UnknownReference(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for WorkflowError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(detail) => {
                Self::DuplicateIdentifier(DuplicateField::from_violation(&detail))
            }
            StoreError::MissingReference(detail) => Self::UnknownReference(detail),
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_and_postgres_violations_are_classified() {
        assert_eq!(
            DuplicateField::from_violation("UNIQUE constraint failed: student.enrollment_no"),
            DuplicateField::EnrollmentNo
        );
        assert_eq!(
            DuplicateField::from_violation(
                "duplicate key value violates unique constraint \"teacher_email_key\""
            ),
            DuplicateField::Email
        );
        assert_eq!(
            DuplicateField::from_violation("UNIQUE constraint failed: account.username"),
            DuplicateField::Email
        );
        assert_eq!(
            DuplicateField::from_violation("UNIQUE constraint failed: teacher.employee_id"),
            DuplicateField::EmployeeId
        );
        assert_eq!(
            DuplicateField::from_violation(
                "UNIQUE constraint failed: marks.student_id, marks.subject_id"
            ),
            DuplicateField::Other
        );
    }

    #[test]
    fn store_uniqueness_becomes_duplicate_identifier() {
        let err = WorkflowError::from(StoreError::UniqueViolation(
            "UNIQUE constraint failed: student.email".to_string(),
        ));

        assert!(matches!(
            err,
            WorkflowError::DuplicateIdentifier(DuplicateField::Email)
        ));
        assert_eq!(err.to_string(), "Email already exists.");
    }
}
