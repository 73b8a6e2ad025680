use crate::entity::marks;
use academics_core::domain::{Marks, MarksId, StudentId, SubjectId};
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect,
};

use super::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq)]
pub struct MarksRecord {
    pub id: MarksId,
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub marks: Marks,
}

#[derive(Debug, Clone)]
pub struct NewMarks {
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub marks: Marks,
}

#[async_trait]
pub trait MarksRepository: Send + Sync {
    /// At most one entry per (student, subject); a second one is a
    /// [`StoreError::UniqueViolation`].
    async fn create(&self, new_marks: NewMarks) -> StoreResult<MarksRecord>;
    /// Mean of `marks_obtained` over every entry for the subject, `None`
    /// when the subject has no entries.
    async fn mean_for_subject(&self, subject_id: SubjectId) -> StoreResult<Option<f64>>;
}

#[derive(Clone)]
pub struct SeaOrmMarksRepository {
    db: DatabaseConnection,
}

impl SeaOrmMarksRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: marks::Model) -> StoreResult<MarksRecord> {
        let marks = Marks::new(model.marks_obtained, model.max_marks)
            .map_err(|e| StoreError::invalid_row("marks", e))?;

        Ok(MarksRecord {
            id: MarksId::new(model.id),
            student_id: StudentId::new(model.student_id),
            subject_id: SubjectId::new(model.subject_id),
            marks,
        })
    }
}

#[async_trait]
impl MarksRepository for SeaOrmMarksRepository {
    async fn create(&self, new_marks: NewMarks) -> StoreResult<MarksRecord> {
        let active_model = marks::ActiveModel {
            student_id: Set(new_marks.student_id.value()),
            subject_id: Set(new_marks.subject_id.value()),
            marks_obtained: Set(new_marks.marks.obtained()),
            max_marks: Set(new_marks.marks.max()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Self::map_model(model)
    }

    async fn mean_for_subject(&self, subject_id: SubjectId) -> StoreResult<Option<f64>> {
        let mean = marks::Entity::find()
            .select_only()
            .column_as(
                Expr::expr(Func::avg(Expr::col(marks::Column::MarksObtained))),
                "mean",
            )
            .filter(marks::Column::SubjectId.eq(subject_id.value()))
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await?;

        Ok(mean.flatten())
    }
}
