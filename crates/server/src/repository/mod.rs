mod account_repository;
mod attendance_repository;
mod department_repository;
mod error;
mod marks_repository;
mod student_repository;
mod subject_repository;
mod teacher_repository;

pub use account_repository::{
    AccountRecord, AccountRepository, NewAccount, SeaOrmAccountRepository,
};
pub use attendance_repository::{
    AttendanceCounts, AttendanceRecord, AttendanceRepository, NewAttendance,
    SeaOrmAttendanceRepository,
};
pub use department_repository::{
    DepartmentRecord, DepartmentRepository, NewDepartment, SeaOrmDepartmentRepository,
};
pub use error::{StoreError, StoreResult};
pub use marks_repository::{MarksRecord, MarksRepository, NewMarks, SeaOrmMarksRepository};
pub use student_repository::{
    NewStudent, RegisteredStudent, SeaOrmStudentRepository, StudentRecord, StudentRepository,
};
pub use subject_repository::{
    NewSubject, SeaOrmSubjectRepository, SubjectFilter, SubjectRecord, SubjectRepository,
};
pub use teacher_repository::{
    AssociationRecord, NewTeacher, SeaOrmTeacherRepository, TeacherRecord, TeacherRepository,
};
