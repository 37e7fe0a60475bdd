//! Teacher factory for creating test teacher entities.
//!
//! Teachers reference a department and a degree by primary key, so both must exist
//! before a teacher can be inserted.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let teacher = TeacherFactory::new(&db, department.id, degree.id)
///     .teacher_id("GV001")
///     .date_of_birth(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
///     .build()
///     .await?;
/// ```
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: String,
    full_name: String,
    date_of_birth: NaiveDate,
    department_id: i32,
    degree_id: i32,
    email: String,
    phone_number: String,
    join_date: NaiveDate,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - teacher_id: `"GV{id:04}"`
    /// - full_name: `"Teacher {id}"`
    /// - email: `"teacher{id}@example.com"`
    /// - phone_number: `"0900000000"`
    /// - date_of_birth: 1985-06-15, join_date: 2015-09-01
    pub fn new(db: &'a DatabaseConnection, department_id: i32, degree_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            teacher_id: format!("GV{:04}", id),
            full_name: format!("Teacher {}", id),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap_or_default(),
            department_id,
            degree_id,
            email: format!("teacher{}@example.com", id),
            phone_number: "0900000000".to_string(),
            join_date: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap_or_default(),
        }
    }

    pub fn teacher_id(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = teacher_id.into();
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn join_date(mut self, join_date: NaiveDate) -> Self {
        self.join_date = join_date;
        self
    }

    /// Builds and inserts the teacher entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::teacher::Model)` - Created teacher entity
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    ///   when the department or degree does not exist
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        let now = Utc::now();
        entity::teacher::ActiveModel {
            id: ActiveValue::NotSet,
            teacher_id: ActiveValue::Set(self.teacher_id),
            full_name: ActiveValue::Set(self.full_name),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            department_id: ActiveValue::Set(self.department_id),
            degree_id: ActiveValue::Set(self.degree_id),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(self.phone_number),
            join_date: ActiveValue::Set(self.join_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values for the given department and degree.
pub async fn create_teacher(
    db: &DatabaseConnection,
    department_id: i32,
    degree_id: i32,
) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db, department_id, degree_id)
        .build()
        .await
}
