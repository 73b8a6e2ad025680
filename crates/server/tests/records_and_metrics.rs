mod common;

use academics_core::domain::{Marks, StudentId};
use academics_server::repository::{
    NewAttendance, NewMarks, StoreError, SubjectFilter, SubjectRecord,
};
use chrono::NaiveDate;

use common::{cohort, fields, seed_department, seed_subject, student_fields, test_state};

async fn registered_student(
    state: &academics_server::api::AppState,
    subject: &SubjectRecord,
    enrollment_no: &str,
) -> StudentId {
    let mut context = academics_core::domain::RegistrationContext::with_cohort(cohort(
        subject.department_id,
        subject.semester.value(),
    ));
    state
        .student_registration
        .register(
            &mut context,
            &student_fields(enrollment_no, &format!("{enrollment_no}@example.edu")),
        )
        .await
        .expect("student should register")
        .student
        .id
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, day).expect("valid date")
}

#[tokio::test]
async fn association_metrics_cover_the_whole_subject() {
    let (state, _db) = test_state().await;
    let mech = seed_department(&state, "ME", "Mechanical Engineering").await;
    let thermo = seed_subject(&state, mech.id, 4, "Thermodynamics").await;
    let first = registered_student(&state, &thermo, "ME001").await;
    let second = registered_student(&state, &thermo, "ME002").await;

    let (teacher, _) = state
        .teachers
        .create_with_subjects(
            academics_server::repository::NewTeacher {
                employee_id: "EMP-100".to_string(),
                first_name: "Neha".to_string(),
                last_name: "Gupta".to_string(),
                email: "neha@example.edu".to_string(),
                phone: None,
                address: None,
                profile_picture: None,
                salary: None,
                designation: academics_core::domain::Designation::Lecturer,
            },
            &[thermo.id],
        )
        .await
        .expect("teacher should be created");
    let association = state
        .teachers
        .associations_of(teacher.id)
        .await
        .expect("associations")
        .remove(0);

    let empty = state
        .metrics
        .for_association(&association)
        .await
        .expect("metrics");
    assert_eq!(empty.average_marks, 0.0);
    assert_eq!(empty.average_attendance, 0.0);

    for (student_id, obtained) in [(first, 80.0), (second, 90.0)] {
        state
            .marks
            .create(NewMarks {
                student_id,
                subject_id: thermo.id,
                marks: Marks::out_of_default(obtained).expect("valid marks"),
            })
            .await
            .expect("marks should be recorded");
    }
    for (student_id, day, present) in [(first, 1, true), (first, 2, true), (second, 1, false)] {
        state
            .attendance
            .create(NewAttendance {
                student_id,
                subject_id: thermo.id,
                date: date(day),
                present,
            })
            .await
            .expect("attendance should be recorded");
    }

    let metrics = state
        .metrics
        .for_association(&association)
        .await
        .expect("metrics");
    assert_eq!(metrics.average_marks, 85.0);
    assert_eq!(metrics.average_attendance, 66.67);
}

#[tokio::test]
async fn second_marks_for_the_same_pair_is_rejected() {
    let (state, _db) = test_state().await;
    let civil = seed_department(&state, "CIV", "Civil Engineering").await;
    let surveying = seed_subject(&state, civil.id, 2, "Surveying").await;
    let student_id = registered_student(&state, &surveying, "CV001").await;
    let new_marks = || NewMarks {
        student_id,
        subject_id: surveying.id,
        marks: Marks::new(40.0, 50.0).expect("valid marks"),
    };

    let recorded = state.marks.create(new_marks()).await.expect("first marks");
    assert_eq!(recorded.marks.max(), 50.0);

    let err = state
        .marks
        .create(new_marks())
        .await
        .expect_err("second marks should fail");
    assert!(matches!(err, StoreError::UniqueViolation(_)));
}

#[tokio::test]
async fn second_attendance_for_the_same_day_is_rejected() {
    let (state, _db) = test_state().await;
    let it = seed_department(&state, "IT", "Information Technology").await;
    let networks = seed_subject(&state, it.id, 6, "Computer Networks").await;
    let student_id = registered_student(&state, &networks, "IT001").await;
    let new_attendance = |present| NewAttendance {
        student_id,
        subject_id: networks.id,
        date: date(15),
        present,
    };

    state
        .attendance
        .create(new_attendance(true))
        .await
        .expect("first attendance");
    let err = state
        .attendance
        .create(new_attendance(false))
        .await
        .expect_err("second attendance should fail");
    assert!(matches!(err, StoreError::UniqueViolation(_)));

    let counts = state
        .attendance
        .counts_for_subject(networks.id)
        .await
        .expect("counts");
    assert_eq!((counts.present, counts.total), (1, 1));
}

#[tokio::test]
async fn subjects_filter_by_department_and_semester() {
    let (state, _db) = test_state().await;
    let computer = seed_department(&state, "CE", "Computer Engineering").await;
    let civil = seed_department(&state, "CIV", "Civil Engineering").await;
    seed_subject(&state, computer.id, 3, "Discrete Mathematics").await;
    seed_subject(&state, computer.id, 3, "Algorithms").await;
    seed_subject(&state, computer.id, 5, "Compilers").await;
    seed_subject(&state, civil.id, 3, "Fluid Mechanics").await;

    let all = state
        .subjects
        .list(SubjectFilter::default())
        .await
        .expect("all subjects");
    assert_eq!(all.len(), 4);

    let third_semester = state
        .subjects
        .list(cohort(computer.id, 3).into())
        .await
        .expect("filtered subjects");
    let names: Vec<_> = third_semester
        .iter()
        .map(|subject| subject.name.as_str())
        .collect();
    assert_eq!(names, vec!["Algorithms", "Discrete Mathematics"]);
}

#[tokio::test]
async fn deleting_a_department_cascades_to_its_students() {
    let (state, _db) = test_state().await;
    let ece = seed_department(&state, "ENTC", "Electronics & Telecommunication").await;
    let signals = seed_subject(&state, ece.id, 1, "Signals").await;
    let student_id = registered_student(&state, &signals, "EN001").await;

    assert!(state.departments.delete(ece.id).await.expect("delete"));
    assert!(!state.departments.delete(ece.id).await.expect("delete again"));
    assert!(
        state
            .students
            .find_by_id(student_id)
            .await
            .expect("lookup")
            .is_none()
    );
}

#[test]
fn department_form_rejects_long_codes() {
    let err = academics_core::forms::DepartmentForm::parse(&fields(&[
        ("code", "MUCHTOOLONGCODE"),
        ("name", "Somewhere"),
    ]))
    .expect_err("code is too long");
    assert!(err.has_field("code"));
}
