//! Degree factory for creating test degree entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test degrees with customizable fields.
pub struct DegreeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    coefficient: f64,
    specialization: String,
    issue_date: NaiveDate,
}

impl<'a> DegreeFactory<'a> {
    /// Creates a new DegreeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Degree {id}"`
    /// - coefficient: `1.0`
    /// - specialization: `"General"`
    /// - issue_date: 2020-01-01
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Degree {}", id),
            coefficient: 1.0,
            specialization: "General".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    pub fn issue_date(mut self, issue_date: NaiveDate) -> Self {
        self.issue_date = issue_date;
        self
    }

    /// Builds and inserts the degree entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::degree::Model)` - Created degree entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::degree::Model, DbErr> {
        let now = Utc::now();
        entity::degree::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            coefficient: ActiveValue::Set(self.coefficient),
            specialization: ActiveValue::Set(self.specialization),
            issue_date: ActiveValue::Set(self.issue_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a degree with default values.
pub async fn create_degree(db: &DatabaseConnection) -> Result<entity::degree::Model, DbErr> {
    DegreeFactory::new(db).build().await
}
