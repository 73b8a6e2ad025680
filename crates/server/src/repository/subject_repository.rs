use crate::entity::subject;
use academics_core::domain::{Cohort, DepartmentId, Semester, SubjectId};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Select,
};

use super::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    pub id: SubjectId,
    pub name: String,
    pub semester: Semester,
    pub department_id: DepartmentId,
}

#[derive(Debug, Clone)]
pub struct NewSubject {
    pub name: String,
    pub semester: Semester,
    pub department_id: DepartmentId,
}

/// Optional narrowing for subject listings; an empty filter lists everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectFilter {
    pub department_id: Option<DepartmentId>,
    pub semester: Option<Semester>,
}

impl From<Cohort> for SubjectFilter {
    fn from(cohort: Cohort) -> Self {
        Self {
            department_id: Some(cohort.department_id),
            semester: Some(cohort.semester),
        }
    }
}

#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn create(&self, new_subject: NewSubject) -> StoreResult<SubjectRecord>;
    /// Ordered by department, semester, then name.
    async fn list(&self, filter: SubjectFilter) -> StoreResult<Vec<SubjectRecord>>;
    /// Subjects taught to one department in one semester.
    async fn list_for_cohort(&self, cohort: Cohort) -> StoreResult<Vec<SubjectRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmSubjectRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub(crate) fn map_model(model: subject::Model) -> StoreResult<SubjectRecord> {
        let semester = Semester::try_from(i32::from(model.semester))
            .map_err(|e| StoreError::invalid_row("subject", e))?;

        Ok(SubjectRecord {
            id: SubjectId::new(model.id),
            name: model.name,
            semester,
            department_id: DepartmentId::new(model.department_id),
        })
    }

    fn filtered(filter: SubjectFilter) -> Select<subject::Entity> {
        let mut query = subject::Entity::find();
        if let Some(department_id) = filter.department_id {
            query = query.filter(subject::Column::DepartmentId.eq(department_id.value()));
        }
        if let Some(semester) = filter.semester {
            query = query.filter(subject::Column::Semester.eq(i16::from(semester.value())));
        }
        query
            .order_by_asc(subject::Column::DepartmentId)
            .order_by_asc(subject::Column::Semester)
            .order_by_asc(subject::Column::Name)
    }

    /// Cohort lookup usable inside a transaction.
    pub(crate) async fn cohort_subjects<C>(conn: &C, cohort: Cohort) -> StoreResult<Vec<SubjectRecord>>
    where
        C: ConnectionTrait,
    {
        Self::filtered(cohort.into())
            .all(conn)
            .await?
            .into_iter()
            .map(Self::map_model)
            .collect()
    }
}

#[async_trait]
impl SubjectRepository for SeaOrmSubjectRepository {
    async fn create(&self, new_subject: NewSubject) -> StoreResult<SubjectRecord> {
        let active_model = subject::ActiveModel {
            name: Set(new_subject.name),
            semester: Set(i16::from(new_subject.semester.value())),
            department_id: Set(new_subject.department_id.value()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Self::map_model(model)
    }

    async fn list(&self, filter: SubjectFilter) -> StoreResult<Vec<SubjectRecord>> {
        let models = Self::filtered(filter).all(&self.db).await?;

        models.into_iter().map(Self::map_model).collect()
    }

    async fn list_for_cohort(&self, cohort: Cohort) -> StoreResult<Vec<SubjectRecord>> {
        Self::cohort_subjects(&self.db, cohort).await
    }
}
