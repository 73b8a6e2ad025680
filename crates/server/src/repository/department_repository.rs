use crate::entity::department;
use academics_core::domain::DepartmentId;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};

use super::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRecord {
    pub id: DepartmentId,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub code: String,
    pub name: String,
}

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, new_department: NewDepartment) -> StoreResult<DepartmentRecord>;
    async fn find_by_id(&self, department_id: DepartmentId)
    -> StoreResult<Option<DepartmentRecord>>;
    async fn list(&self) -> StoreResult<Vec<DepartmentRecord>>;
    /// Removes the department together with its subjects and students.
    async fn delete(&self, department_id: DepartmentId) -> StoreResult<bool>;
}

#[derive(Clone)]
pub struct SeaOrmDepartmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub(crate) fn map_model(model: department::Model) -> DepartmentRecord {
        DepartmentRecord {
            id: DepartmentId::new(model.id),
            code: model.code,
            name: model.name,
        }
    }
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn create(&self, new_department: NewDepartment) -> StoreResult<DepartmentRecord> {
        let active_model = department::ActiveModel {
            code: Set(new_department.code),
            name: Set(new_department.name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn find_by_id(
        &self,
        department_id: DepartmentId,
    ) -> StoreResult<Option<DepartmentRecord>> {
        let model = department::Entity::find_by_id(department_id.value())
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }

    async fn list(&self) -> StoreResult<Vec<DepartmentRecord>> {
        let models = department::Entity::find()
            .order_by_asc(department::Column::Code)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn delete(&self, department_id: DepartmentId) -> StoreResult<bool> {
        let result = department::Entity::delete_by_id(department_id.value())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
