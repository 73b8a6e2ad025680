mod department_page;
mod designation;
mod error;
mod ids;
mod marks;
pub mod metrics;
mod registration;
mod semester;

pub use department_page::DepartmentPage;
pub use designation::Designation;
pub use error::DomainError;
pub use ids::{
    AccountId, AssociationId, AttendanceId, DepartmentId, MarksId, StudentId, SubjectId, TeacherId,
};
pub use marks::Marks;
pub use metrics::SubjectMetrics;
pub use registration::{Cohort, RegistrationContext, RegistrationStage};
pub use semester::Semester;
