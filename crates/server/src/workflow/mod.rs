//! The two registration wizards.
//!
//! Students carry their step 1 choice in session state; teachers carry it in
//! the step 2 query string.

mod error;
mod student;
mod teacher;

pub use error::{DuplicateField, WorkflowError};
pub use student::{StudentProfileStep, StudentRegistered, StudentRegistration};
pub use teacher::{TeacherRegistered, TeacherRegistration};
