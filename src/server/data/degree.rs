//! Degree data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::degree::{CreateDegreeParam, Degree, UpdateDegreeParam};

/// Repository providing database operations for degrees.
pub struct DegreeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DegreeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every degree in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Degree>, DbErr> {
        let entities = entity::prelude::Degree::find()
            .order_by_asc(entity::degree::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Degree::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Degree>, DbErr> {
        let entity = entity::prelude::Degree::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Degree::from_entity))
    }

    /// Finds a degree by exact, case-sensitive name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Degree>, DbErr> {
        let entity = entity::prelude::Degree::find()
            .filter(entity::degree::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Degree::from_entity))
    }

    /// Creates a new degree.
    ///
    /// # Returns
    /// - `Ok(Degree)` - The created degree with generated ID and timestamps
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, param: CreateDegreeParam) -> Result<Degree, DbErr> {
        let now = Utc::now();
        let entity = entity::degree::ActiveModel {
            name: ActiveValue::Set(param.name),
            coefficient: ActiveValue::Set(param.coefficient),
            specialization: ActiveValue::Set(param.specialization),
            issue_date: ActiveValue::Set(param.issue_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Degree::from_entity(entity))
    }

    /// Replaces a degree's fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Degree)` - The updated degree
    /// - `Err(DbErr::RecordNotFound)` - No degree exists with the specified ID
    /// - `Err(DbErr)` - Other database error, including a unique violation on `name`
    pub async fn update(&self, param: UpdateDegreeParam) -> Result<Degree, DbErr> {
        let degree = entity::prelude::Degree::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Degree with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::degree::ActiveModel = degree.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.coefficient = ActiveValue::Set(param.coefficient);
        active_model.specialization = ActiveValue::Set(param.specialization);
        active_model.issue_date = ActiveValue::Set(param.issue_date);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Degree::from_entity(entity))
    }

    /// Deletes a degree.
    ///
    /// # Returns
    /// - `Ok(true)` - Degree deleted
    /// - `Ok(false)` - No degree with that ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation while teachers
    ///   still reference the degree
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Degree::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of teachers holding the degree.
    pub async fn get_teacher_count(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::DegreeId.eq(id))
            .count(self.db)
            .await
    }
}
