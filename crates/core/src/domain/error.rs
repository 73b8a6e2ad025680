use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("invalid semester: {0}. semester must be in [1, 8]")]
    InvalidSemester(i64),

    #[error("invalid semester: {0:?}. semester must be a number in [1, 8]")]
    UnparsableSemester(String),

    #[error("unknown designation code: {0}")]
    UnknownDesignation(String),

    #[error("invalid max marks: {0}. max marks must be greater than 0")]
    InvalidMaxMarks(f64),

    #[error("marks obtained {obtained} must be in [0, {max}]")]
    MarksOutOfRange { obtained: f64, max: f64 },
}
