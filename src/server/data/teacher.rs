//! Teacher data repository for database operations.
//!
//! Rows only store `department_id`/`degree_id`; every read joins in the current department
//! abbreviation and degree name so renames show up without touching teacher rows.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::teacher::{Teacher, TeacherRecord};

/// Repository providing database operations for teachers.
pub struct TeacherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every teacher in insertion order.
    ///
    /// Departments and degrees are loaded in two batch queries rather than per row.
    ///
    /// # Returns
    /// - `Ok(Vec<Teacher>)` - All teachers with their department abbreviation and degree name
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Teacher>, DbErr> {
        let entities = entity::prelude::Teacher::find()
            .order_by_asc(entity::teacher::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find_by_id(id).one(self.db).await?;

        self.hydrate_one(entity).await
    }

    /// Finds a teacher by staff code, e.g. `GV001`.
    pub async fn get_by_code(&self, teacher_id: &str) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::TeacherId.eq(teacher_id))
            .one(self.db)
            .await?;

        self.hydrate_one(entity).await
    }

    pub async fn exists_with_code(&self, teacher_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::TeacherId.eq(teacher_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether another teacher already uses the email.
    ///
    /// # Arguments
    /// - `email` - Normalised (trimmed, lower-cased) email
    /// - `exclude_id` - Teacher to ignore, used when the teacher keeps its own email on update
    pub async fn exists_with_email(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Teacher::find().filter(entity::teacher::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::teacher::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Creates a new teacher.
    ///
    /// # Arguments
    /// - `teacher_id` - Staff code, immutable afterwards
    /// - `record` - Column values with references already resolved to primary keys
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The created teacher
    /// - `Err(DbErr)` - Database error, including unique violations on staff code or email
    ///   and foreign key violations when a reference vanished meanwhile
    pub async fn create(
        &self,
        teacher_id: String,
        record: TeacherRecord,
    ) -> Result<Teacher, DbErr> {
        let now = Utc::now();
        let entity = entity::teacher::ActiveModel {
            teacher_id: ActiveValue::Set(teacher_id),
            full_name: ActiveValue::Set(record.full_name),
            date_of_birth: ActiveValue::Set(record.date_of_birth),
            department_id: ActiveValue::Set(record.department_id),
            degree_id: ActiveValue::Set(record.degree_id),
            email: ActiveValue::Set(record.email),
            phone_number: ActiveValue::Set(record.phone_number),
            join_date: ActiveValue::Set(record.join_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.hydrate_one(Some(entity))
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Created teacher could not be loaded".to_string()))
    }

    /// Replaces a teacher's editable fields and bumps `updated_at`. The staff code is kept.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The updated teacher
    /// - `Err(DbErr::RecordNotFound)` - No teacher exists with the specified ID
    /// - `Err(DbErr)` - Other database error, including a unique violation on email
    pub async fn update(&self, id: i32, record: TeacherRecord) -> Result<Teacher, DbErr> {
        let teacher = entity::prelude::Teacher::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Teacher with id {} not found",
                id
            )))?;

        let mut active_model: entity::teacher::ActiveModel = teacher.into();
        active_model.full_name = ActiveValue::Set(record.full_name);
        active_model.date_of_birth = ActiveValue::Set(record.date_of_birth);
        active_model.department_id = ActiveValue::Set(record.department_id);
        active_model.degree_id = ActiveValue::Set(record.degree_id);
        active_model.email = ActiveValue::Set(record.email);
        active_model.phone_number = ActiveValue::Set(record.phone_number);
        active_model.join_date = ActiveValue::Set(record.join_date);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        self.hydrate_one(Some(entity))
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Teacher with id {} not found", id)))
    }

    /// Deletes a teacher.
    ///
    /// # Returns
    /// - `Ok(true)` - Teacher deleted
    /// - `Ok(false)` - No teacher with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Teacher::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn hydrate_one(
        &self,
        entity: Option<entity::teacher::Model>,
    ) -> Result<Option<Teacher>, DbErr> {
        let Some(entity) = entity else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.into_iter().next())
    }

    /// Attaches department abbreviations and degree names to teacher rows.
    async fn hydrate(&self, entities: Vec<entity::teacher::Model>) -> Result<Vec<Teacher>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let department_ids: Vec<i32> = entities.iter().map(|t| t.department_id).collect();
        let degree_ids: Vec<i32> = entities.iter().map(|t| t.degree_id).collect();

        let departments: HashMap<i32, String> = entity::prelude::Department::find()
            .filter(entity::department::Column::Id.is_in(department_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|d| (d.id, d.abbreviation))
            .collect();

        let degrees: HashMap<i32, String> = entity::prelude::Degree::find()
            .filter(entity::degree::Column::Id.is_in(degree_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        Ok(entities
            .into_iter()
            .map(|entity| {
                let department = departments
                    .get(&entity.department_id)
                    .cloned()
                    .unwrap_or_default();
                let degree = degrees.get(&entity.degree_id).cloned().unwrap_or_default();
                Teacher::from_entity(entity, department, degree)
            })
            .collect())
    }
}
