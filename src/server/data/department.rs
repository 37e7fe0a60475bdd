//! Department data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::department::{
    CreateDepartmentParam, Department, UpdateDepartmentParam,
};

/// Repository providing database operations for departments.
pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every department in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Department>, DbErr> {
        let entities = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Department::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    /// Finds a department by exact, case-sensitive abbreviation.
    pub async fn find_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find()
            .filter(entity::department::Column::Abbreviation.eq(abbreviation))
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    /// Creates a new department.
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department with generated ID and timestamps
    /// - `Err(DbErr)` - Database error, including a unique violation on `abbreviation`
    pub async fn create(&self, param: CreateDepartmentParam) -> Result<Department, DbErr> {
        let now = Utc::now();
        let entity = entity::department::ActiveModel {
            full_name: ActiveValue::Set(param.full_name),
            abbreviation: ActiveValue::Set(param.abbreviation),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Department::from_entity(entity))
    }

    /// Replaces a department's fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Department)` - The updated department
    /// - `Err(DbErr::RecordNotFound)` - No department exists with the specified ID
    /// - `Err(DbErr)` - Other database error, including a unique violation on `abbreviation`
    pub async fn update(&self, param: UpdateDepartmentParam) -> Result<Department, DbErr> {
        let department = entity::prelude::Department::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Department with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::department::ActiveModel = department.into();
        active_model.full_name = ActiveValue::Set(param.full_name);
        active_model.abbreviation = ActiveValue::Set(param.abbreviation);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Department::from_entity(entity))
    }

    /// Deletes a department.
    ///
    /// # Returns
    /// - `Ok(true)` - Department deleted
    /// - `Ok(false)` - No department with that ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation while teachers
    ///   still belong to the department
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Department::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of teachers belonging to the department.
    pub async fn get_teacher_count(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::DepartmentId.eq(id))
            .count(self.db)
            .await
    }
}
