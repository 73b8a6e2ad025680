use crate::entity::{student, student_subject, subject};
use academics_core::domain::{
    AccountId, Cohort, DepartmentId, Semester, StudentId,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use super::account_repository::{NewAccount, SeaOrmAccountRepository};
use super::subject_repository::{SeaOrmSubjectRepository, SubjectRecord};
use super::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: StudentId,
    pub enrollment_no: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    pub department_id: DepartmentId,
    pub semester: Semester,
    pub account_id: Option<AccountId>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_joined: NaiveDate,
}

impl StudentRecord {
    pub fn cohort(&self) -> Cohort {
        Cohort {
            department_id: self.department_id,
            semester: self.semester,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub enrollment_no: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub cohort: Cohort,
}

#[derive(Debug, Clone)]
pub struct RegisteredStudent {
    pub student: StudentRecord,
    pub subjects: Vec<SubjectRecord>,
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn enrollment_no_exists(&self, enrollment_no: &str) -> StoreResult<bool>;
    async fn email_exists(&self, email: &str) -> StoreResult<bool>;
    /// Creates the login account, the student and the student's cohort
    /// subject links in one transaction.
    async fn register(&self, new_student: NewStudent) -> StoreResult<RegisteredStudent>;
    async fn find_by_id(&self, student_id: StudentId) -> StoreResult<Option<StudentRecord>>;
    /// Enrolled subjects ordered by semester, then name.
    async fn subjects_of(&self, student_id: StudentId) -> StoreResult<Vec<SubjectRecord>>;
    async fn delete(&self, student_id: StudentId) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: student::Model) -> StoreResult<StudentRecord> {
        let semester = Semester::try_from(i32::from(model.semester))
            .map_err(|e| StoreError::invalid_row("student", e))?;

        Ok(StudentRecord {
            id: StudentId::new(model.id),
            enrollment_no: model.enrollment_no,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            profile_picture: model.profile_picture,
            department_id: DepartmentId::new(model.department_id),
            semester,
            account_id: model.account_id.map(AccountId::new),
            date_of_birth: model.date_of_birth,
            date_joined: model.date_joined,
        })
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn enrollment_no_exists(&self, enrollment_no: &str) -> StoreResult<bool> {
        let count = student::Entity::find()
            .filter(student::Column::EnrollmentNo.eq(enrollment_no))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        let count = student::Entity::find()
            .filter(student::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn register(&self, new_student: NewStudent) -> StoreResult<RegisteredStudent> {
        let txn = self.db.begin().await?;

        let account = SeaOrmAccountRepository::insert(
            &txn,
            NewAccount {
                username: new_student.email.clone(),
                email: new_student.email.clone(),
                first_name: new_student.first_name.clone(),
                last_name: new_student.last_name.clone(),
                password: new_student.password,
            },
        )
        .await?;

        let cohort = new_student.cohort;
        let active_model = student::ActiveModel {
            enrollment_no: Set(new_student.enrollment_no),
            first_name: Set(new_student.first_name),
            last_name: Set(new_student.last_name),
            email: Set(new_student.email),
            phone: Set(new_student.phone),
            address: Set(new_student.address),
            profile_picture: Set(new_student.profile_picture),
            department_id: Set(cohort.department_id.value()),
            semester: Set(i16::from(cohort.semester.value())),
            account_id: Set(Some(account.id.value())),
            date_of_birth: Set(new_student.date_of_birth),
            date_joined: Set(chrono::Utc::now().date_naive()),
            ..Default::default()
        };
        let model = active_model.insert(&txn).await?;

        let subjects = SeaOrmSubjectRepository::cohort_subjects(&txn, cohort).await?;
        if !subjects.is_empty() {
            let links = subjects.iter().map(|subject| student_subject::ActiveModel {
                student_id: Set(model.id),
                subject_id: Set(subject.id.value()),
            });
            student_subject::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(RegisteredStudent {
            student: Self::map_model(model)?,
            subjects,
        })
    }

    async fn find_by_id(&self, student_id: StudentId) -> StoreResult<Option<StudentRecord>> {
        let model = student::Entity::find_by_id(student_id.value())
            .one(&self.db)
            .await?;

        model.map(Self::map_model).transpose()
    }

    async fn subjects_of(&self, student_id: StudentId) -> StoreResult<Vec<SubjectRecord>> {
        let Some(model) = student::Entity::find_by_id(student_id.value())
            .one(&self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let subjects = model
            .find_related(subject::Entity)
            .order_by_asc(subject::Column::Semester)
            .order_by_asc(subject::Column::Name)
            .all(&self.db)
            .await?;

        subjects
            .into_iter()
            .map(SeaOrmSubjectRepository::map_model)
            .collect()
    }

    async fn delete(&self, student_id: StudentId) -> StoreResult<bool> {
        let result = student::Entity::delete_by_id(student_id.value())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

