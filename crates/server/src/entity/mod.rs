pub mod account;
pub mod attendance;
pub mod department;
pub mod marks;
pub mod student;
pub mod student_subject;
pub mod subject;
pub mod teacher;
pub mod teacher_subject;
