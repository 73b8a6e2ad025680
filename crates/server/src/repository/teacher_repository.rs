use crate::entity::{subject, teacher, teacher_subject};
use academics_core::domain::{AssociationId, Designation, SubjectId, TeacherId};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use super::subject_repository::{SeaOrmSubjectRepository, SubjectRecord};
use super::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherRecord {
    pub id: TeacherId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    pub salary: Option<f64>,
    pub designation: Designation,
    pub date_joined: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    pub salary: Option<f64>,
    pub designation: Designation,
}

/// A subject a teacher is linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationRecord {
    pub id: AssociationId,
    pub teacher_id: TeacherId,
    pub subject: SubjectRecord,
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Creates the teacher and one association per subject in one transaction.
    async fn create_with_subjects(
        &self,
        new_teacher: NewTeacher,
        subjects: &[SubjectId],
    ) -> StoreResult<(TeacherRecord, Vec<AssociationId>)>;
    async fn find_by_id(&self, teacher_id: TeacherId) -> StoreResult<Option<TeacherRecord>>;
    /// All teachers ordered by id.
    async fn list(&self) -> StoreResult<Vec<TeacherRecord>>;
    async fn associations_of(&self, teacher_id: TeacherId) -> StoreResult<Vec<AssociationRecord>>;
    async fn delete(&self, teacher_id: TeacherId) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct SeaOrmTeacherRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeacherRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: teacher::Model) -> StoreResult<TeacherRecord> {
        let designation: Designation = model
            .designation
            .parse()
            .map_err(|e| StoreError::invalid_row("teacher", e))?;

        Ok(TeacherRecord {
            id: TeacherId::new(model.id),
            employee_id: model.employee_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            profile_picture: model.profile_picture,
            salary: model.salary,
            designation,
            date_joined: model.date_joined,
        })
    }
}

#[async_trait]
impl TeacherRepository for SeaOrmTeacherRepository {
    async fn create_with_subjects(
        &self,
        new_teacher: NewTeacher,
        subjects: &[SubjectId],
    ) -> StoreResult<(TeacherRecord, Vec<AssociationId>)> {
        let txn = self.db.begin().await?;

        let active_model = teacher::ActiveModel {
            employee_id: Set(new_teacher.employee_id),
            first_name: Set(new_teacher.first_name),
            last_name: Set(new_teacher.last_name),
            email: Set(new_teacher.email),
            phone: Set(new_teacher.phone),
            address: Set(new_teacher.address),
            profile_picture: Set(new_teacher.profile_picture),
            salary: Set(new_teacher.salary),
            designation: Set(new_teacher.designation.code().to_string()),
            date_joined: Set(chrono::Utc::now().date_naive()),
            ..Default::default()
        };
        let model = active_model.insert(&txn).await?;

        let mut associations = Vec::with_capacity(subjects.len());
        for subject_id in subjects {
            let link = teacher_subject::ActiveModel {
                teacher_id: Set(model.id),
                subject_id: Set(subject_id.value()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            associations.push(AssociationId::new(link.id));
        }

        txn.commit().await?;

        Ok((Self::map_model(model)?, associations))
    }

    async fn find_by_id(&self, teacher_id: TeacherId) -> StoreResult<Option<TeacherRecord>> {
        let model = teacher::Entity::find_by_id(teacher_id.value())
            .one(&self.db)
            .await?;

        model.map(Self::map_model).transpose()
    }

    async fn list(&self) -> StoreResult<Vec<TeacherRecord>> {
        let models = teacher::Entity::find()
            .order_by_asc(teacher::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::map_model).collect()
    }

    async fn associations_of(&self, teacher_id: TeacherId) -> StoreResult<Vec<AssociationRecord>> {
        let rows = teacher_subject::Entity::find()
            .filter(teacher_subject::Column::TeacherId.eq(teacher_id.value()))
            .find_also_related(subject::Entity)
            .order_by_asc(teacher_subject::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(link, subject)| {
                let subject = subject.ok_or_else(|| {
                    StoreError::invalid_row(
                        "teacher_subject",
                        format!("subject {} of association {} is missing", link.subject_id, link.id),
                    )
                })?;
                Ok(AssociationRecord {
                    id: AssociationId::new(link.id),
                    teacher_id: TeacherId::new(link.teacher_id),
                    subject: SeaOrmSubjectRepository::map_model(subject)?,
                })
            })
            .collect()
    }

    async fn delete(&self, teacher_id: TeacherId) -> StoreResult<bool> {
        let result = teacher::Entity::delete_by_id(teacher_id.value())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
