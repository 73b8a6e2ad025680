use crate::entity::attendance;
use academics_core::domain::{AttendanceId, StudentId, SubjectId};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use super::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub date: NaiveDate,
    pub present: bool,
}

#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub date: NaiveDate,
    pub present: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceCounts {
    pub present: u64,
    pub total: u64,
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// At most one entry per (student, subject, date).
    async fn create(&self, new_attendance: NewAttendance) -> StoreResult<AttendanceRecord>;
    async fn counts_for_subject(&self, subject_id: SubjectId) -> StoreResult<AttendanceCounts>;
}

#[derive(Clone)]
pub struct SeaOrmAttendanceRepository {
    db: DatabaseConnection,
}

impl SeaOrmAttendanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: attendance::Model) -> AttendanceRecord {
        AttendanceRecord {
            id: AttendanceId::new(model.id),
            student_id: StudentId::new(model.student_id),
            subject_id: SubjectId::new(model.subject_id),
            date: model.date,
            present: model.status,
        }
    }
}

#[async_trait]
impl AttendanceRepository for SeaOrmAttendanceRepository {
    async fn create(&self, new_attendance: NewAttendance) -> StoreResult<AttendanceRecord> {
        let active_model = attendance::ActiveModel {
            student_id: Set(new_attendance.student_id.value()),
            subject_id: Set(new_attendance.subject_id.value()),
            date: Set(new_attendance.date),
            status: Set(new_attendance.present),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn counts_for_subject(&self, subject_id: SubjectId) -> StoreResult<AttendanceCounts> {
        let total = attendance::Entity::find()
            .filter(attendance::Column::SubjectId.eq(subject_id.value()))
            .count(&self.db)
            .await?;
        let present = attendance::Entity::find()
            .filter(attendance::Column::SubjectId.eq(subject_id.value()))
            .filter(attendance::Column::Status.eq(true))
            .count(&self.db)
            .await?;

        Ok(AttendanceCounts { present, total })
    }
}
