mod common;

use academics_core::domain::{RegistrationContext, RegistrationStage};
use academics_server::entity::{account, student};
use academics_server::workflow::{DuplicateField, WorkflowError};
use sea_orm::{EntityTrait, PaginatorTrait};

use common::{cohort, fields, seed_department, seed_subject, student_fields, test_state};

#[tokio::test]
async fn student_is_enrolled_in_exactly_the_cohort_subjects() {
    let (state, _db) = test_state().await;
    let computer = seed_department(&state, "CE", "Computer Engineering").await;
    let civil = seed_department(&state, "CIV", "Civil Engineering").await;
    let dbms = seed_subject(&state, computer.id, 3, "Database Systems").await;
    let ds = seed_subject(&state, computer.id, 3, "Data Structures").await;
    seed_subject(&state, computer.id, 4, "Operating Systems").await;
    seed_subject(&state, civil.id, 3, "Surveying").await;

    let computer_id = computer.id.to_string();
    let mut context = RegistrationContext::new();
    state
        .student_registration
        .select_cohort(
            &mut context,
            &fields(&[("department", computer_id.as_str()), ("semester", "3")]),
        )
        .expect("cohort should be accepted");
    assert_eq!(context.stage(), RegistrationStage::AwaitingStep2);

    let registered = state
        .student_registration
        .register(&mut context, &student_fields("CE2023001", "asha@example.edu"))
        .await
        .expect("student should register");

    let enrolled = state
        .students
        .subjects_of(registered.student.id)
        .await
        .expect("subjects should load");
    let mut enrolled_ids: Vec<_> = enrolled.iter().map(|subject| subject.id).collect();
    enrolled_ids.sort();
    let mut expected = vec![dbms.id, ds.id];
    expected.sort();

    assert_eq!(enrolled_ids, expected);
    assert_eq!(registered.subjects.len(), 2);
    assert_eq!(
        registered.success_message(),
        "Student Asha Patil registered successfully with 2 subjects."
    );
    assert!(registered.student.account_id.is_some());
    assert_eq!(context.cohort(), Some(cohort(computer.id, 3)));
    assert_eq!(context.stage(), RegistrationStage::Complete);
}

#[tokio::test]
async fn cohort_without_subjects_registers_with_none() {
    let (state, _db) = test_state().await;
    let it = seed_department(&state, "IT", "Information Technology").await;
    let mut context = RegistrationContext::with_cohort(cohort(it.id, 8));

    let registered = state
        .student_registration
        .register(&mut context, &student_fields("IT2020007", "ravi@example.edu"))
        .await
        .expect("student should register");

    assert!(registered.subjects.is_empty());
    assert_eq!(
        registered.success_message(),
        "Student Asha Patil registered successfully with 0 subjects."
    );
}

#[tokio::test]
async fn duplicate_enrollment_number_creates_nothing() {
    let (state, db) = test_state().await;
    let computer = seed_department(&state, "CE", "Computer Engineering").await;
    let mut context = RegistrationContext::with_cohort(cohort(computer.id, 1));

    state
        .student_registration
        .register(&mut context, &student_fields("CE2024001", "first@example.edu"))
        .await
        .expect("first student should register");

    let err = state
        .student_registration
        .register(&mut context, &student_fields("CE2024001", "second@example.edu"))
        .await
        .expect_err("duplicate enrollment number should fail");

    assert!(matches!(
        err,
        WorkflowError::DuplicateIdentifier(DuplicateField::EnrollmentNo)
    ));
    assert_eq!(err.to_string(), "Enrollment number already exists.");
    assert_eq!(context.stage(), RegistrationStage::AwaitingStep2);
    assert_eq!(student::Entity::find().count(&db).await.expect("count"), 1);
    assert_eq!(account::Entity::find().count(&db).await.expect("count"), 1);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (state, db) = test_state().await;
    let computer = seed_department(&state, "CE", "Computer Engineering").await;
    let mut context = RegistrationContext::with_cohort(cohort(computer.id, 2));

    state
        .student_registration
        .register(&mut context, &student_fields("CE2024010", "shared@example.edu"))
        .await
        .expect("first student should register");

    let err = state
        .student_registration
        .register(&mut context, &student_fields("CE2024011", "shared@example.edu"))
        .await
        .expect_err("duplicate email should fail");

    assert!(matches!(
        err,
        WorkflowError::DuplicateIdentifier(DuplicateField::Email)
    ));
    assert_eq!(err.to_string(), "Email already exists.");
    assert_eq!(student::Entity::find().count(&db).await.expect("count"), 1);
}

#[tokio::test]
async fn email_held_only_by_an_account_is_rejected() {
    let (state, db) = test_state().await;
    let computer = seed_department(&state, "CE", "Computer Engineering").await;
    let mut context = RegistrationContext::with_cohort(cohort(computer.id, 2));

    let first = state
        .student_registration
        .register(&mut context, &student_fields("CE2024030", "kept@example.edu"))
        .await
        .expect("first student should register");
    assert!(
        state
            .students
            .delete(first.student.id)
            .await
            .expect("delete student")
    );
    assert_eq!(student::Entity::find().count(&db).await.expect("count"), 0);
    assert_eq!(account::Entity::find().count(&db).await.expect("count"), 1);

    let err = state
        .student_registration
        .register(&mut context, &student_fields("CE2024031", "kept@example.edu"))
        .await
        .expect_err("email held by an account should fail");

    assert!(matches!(
        err,
        WorkflowError::DuplicateIdentifier(DuplicateField::Email)
    ));
    assert_eq!(err.to_string(), "Email already exists.");
    assert_eq!(student::Entity::find().count(&db).await.expect("count"), 0);
    assert_eq!(account::Entity::find().count(&db).await.expect("count"), 1);
}

#[tokio::test]
async fn step2_without_cohort_is_a_missing_prerequisite() {
    let (state, db) = test_state().await;
    seed_department(&state, "CE", "Computer Engineering").await;
    let mut context = RegistrationContext::new();

    let err = state
        .student_registration
        .register(&mut context, &student_fields("CE2024020", "nobody@example.edu"))
        .await
        .expect_err("registration without a cohort should fail");

    assert!(matches!(err, WorkflowError::MissingPrerequisite));
    assert_eq!(err.to_string(), "Please select department and semester first.");
    assert_eq!(student::Entity::find().count(&db).await.expect("count"), 0);
    assert_eq!(account::Entity::find().count(&db).await.expect("count"), 0);
}

#[tokio::test]
async fn invalid_profile_lists_every_offending_field() {
    let (state, _db) = test_state().await;
    let computer = seed_department(&state, "CE", "Computer Engineering").await;
    let mut context = RegistrationContext::with_cohort(cohort(computer.id, 1));

    let err = state
        .student_registration
        .register(
            &mut context,
            &fields(&[
                ("first_name", "Asha"),
                ("last_name", "Patil"),
                ("email", "not-an-email"),
                ("password", "pw"),
            ]),
        )
        .await
        .expect_err("incomplete profile should fail");

    let WorkflowError::Validation(form) = err else {
        panic!("expected a validation error");
    };
    assert!(form.has_field("enrollment_no"));
    assert!(form.has_field("email"));
}

#[tokio::test]
async fn profile_step_for_a_deleted_department_is_not_found() {
    let (state, _db) = test_state().await;
    let context = RegistrationContext::with_cohort(cohort(
        academics_core::domain::DepartmentId::new(99),
        1,
    ));

    let err = state
        .student_registration
        .profile_step(&context)
        .await
        .expect_err("unknown department should fail");

    assert!(matches!(
        err,
        WorkflowError::RecordNotFound {
            entity: "department",
            id: 99
        }
    ));
}

#[tokio::test]
async fn registered_account_accepts_the_submitted_password() {
    use academics_server::repository::{AccountRepository, SeaOrmAccountRepository};

    let (state, db) = test_state().await;
    let computer = seed_department(&state, "CE", "Computer Engineering").await;
    let mut context = RegistrationContext::with_cohort(cohort(computer.id, 5));
    state
        .student_registration
        .register(&mut context, &student_fields("CE2021005", "login@example.edu"))
        .await
        .expect("student should register");

    let accounts = SeaOrmAccountRepository::new(db);
    assert!(
        accounts
            .verify_password("login@example.edu", "s3cret-pass")
            .await
            .expect("verify")
    );
    assert!(
        !accounts
            .verify_password("login@example.edu", "wrong")
            .await
            .expect("verify")
    );
}
