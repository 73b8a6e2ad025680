#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use academics_core::domain::{Cohort, DepartmentId, Semester};
use academics_core::forms::FormFields;
use academics_migration::{Migrator, MigratorTrait};
use academics_server::api::AppState;
use academics_server::repository::{DepartmentRecord, NewDepartment, NewSubject, SubjectRecord};
use academics_server::session::SessionStore;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database with the schema applied. A single pooled
/// connection keeps every query on the same in-memory database.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("in-memory sqlite should connect");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply");
    db
}

pub async fn test_state() -> (Arc<AppState>, DatabaseConnection) {
    let db = test_db().await;
    let state = AppState::new(db.clone(), SessionStore::new(Duration::from_secs(600)));
    (Arc::new(state), db)
}

pub async fn seed_department(state: &AppState, code: &str, name: &str) -> DepartmentRecord {
    state
        .departments
        .create(NewDepartment {
            code: code.to_string(),
            name: name.to_string(),
        })
        .await
        .expect("department should be created")
}

pub async fn seed_subject(
    state: &AppState,
    department_id: DepartmentId,
    semester: u8,
    name: &str,
) -> SubjectRecord {
    state
        .subjects
        .create(NewSubject {
            name: name.to_string(),
            semester: Semester::new(semester).expect("valid semester"),
            department_id,
        })
        .await
        .expect("subject should be created")
}

pub fn cohort(department_id: DepartmentId, semester: u8) -> Cohort {
    Cohort {
        department_id,
        semester: Semester::new(semester).expect("valid semester"),
    }
}

pub fn fields(pairs: &[(&str, &str)]) -> FormFields {
    pairs.iter().copied().collect()
}

pub fn student_fields(enrollment_no: &str, email: &str) -> FormFields {
    fields(&[
        ("enrollment_no", enrollment_no),
        ("first_name", "Asha"),
        ("last_name", "Patil"),
        ("email", email),
        ("password", "s3cret-pass"),
        ("phone", "9876543210"),
        ("date_of_birth", "2004-02-29"),
    ])
}
