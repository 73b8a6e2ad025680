//! Shared application state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::metrics::MetricCalculator;
use crate::repository::{
    AttendanceRepository, DepartmentRepository, MarksRepository, SeaOrmAccountRepository,
    SeaOrmAttendanceRepository, SeaOrmDepartmentRepository, SeaOrmMarksRepository,
    SeaOrmStudentRepository, SeaOrmSubjectRepository, SeaOrmTeacherRepository,
    StudentRepository, SubjectRepository, TeacherRepository,
};
use crate::session::SessionStore;
use crate::workflow::{StudentRegistration, TeacherRegistration};

/// Repositories, workflows and the session store used by every handler.
#[derive(Clone)]
pub struct AppState {
    pub departments: Arc<dyn DepartmentRepository>,
    pub subjects: Arc<dyn SubjectRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub teachers: Arc<dyn TeacherRepository>,
    pub marks: Arc<dyn MarksRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub student_registration: StudentRegistration,
    pub teacher_registration: TeacherRegistration,
    pub metrics: MetricCalculator,
    pub sessions: SessionStore,
}

impl AppState {
    /// Wires the sea-orm repositories over one connection pool.
    pub fn new(db: DatabaseConnection, sessions: SessionStore) -> Self {
        let departments: Arc<dyn DepartmentRepository> =
            Arc::new(SeaOrmDepartmentRepository::new(db.clone()));
        let subjects: Arc<dyn SubjectRepository> =
            Arc::new(SeaOrmSubjectRepository::new(db.clone()));
        let students: Arc<dyn StudentRepository> =
            Arc::new(SeaOrmStudentRepository::new(db.clone()));
        let teachers: Arc<dyn TeacherRepository> =
            Arc::new(SeaOrmTeacherRepository::new(db.clone()));
        let marks: Arc<dyn MarksRepository> = Arc::new(SeaOrmMarksRepository::new(db.clone()));
        let attendance: Arc<dyn AttendanceRepository> =
            Arc::new(SeaOrmAttendanceRepository::new(db.clone()));
        let accounts = Arc::new(SeaOrmAccountRepository::new(db));

        Self {
            student_registration: StudentRegistration::new(
                departments.clone(),
                students.clone(),
                accounts,
            ),
            teacher_registration: TeacherRegistration::new(subjects.clone(), teachers.clone()),
            metrics: MetricCalculator::new(marks.clone(), attendance.clone()),
            departments,
            subjects,
            students,
            teachers,
            marks,
            attendance,
            sessions,
        }
    }
}
