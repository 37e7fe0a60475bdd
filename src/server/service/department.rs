use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::validation::Validate,
    server::{
        data::department::DepartmentRepository,
        error::AppError,
        model::department::{CreateDepartmentParam, Department, UpdateDepartmentParam},
        service::constraint_conflict,
    },
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Department>, AppError> {
        Ok(DepartmentRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Department, AppError> {
        DepartmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a department after checking the field rules and that the abbreviation is free.
    pub async fn create(&self, param: CreateDepartmentParam) -> Result<Department, AppError> {
        param.validate()?;

        let repo = DepartmentRepository::new(self.db);

        if repo
            .find_by_abbreviation(&param.abbreviation)
            .await?
            .is_some()
        {
            return Err(abbreviation_taken(&param.abbreviation));
        }

        let abbreviation = param.abbreviation.clone();
        let department = repo
            .create(param)
            .await
            .map_err(|e| constraint_conflict(e, || abbreviation_taken_message(&abbreviation)))?;

        tracing::debug!(
            "Created department {} ({})",
            department.id,
            department.abbreviation
        );

        Ok(department)
    }

    /// Replaces a department. The abbreviation is re-checked only when it changes; teachers
    /// pick up a new abbreviation automatically.
    pub async fn update(&self, param: UpdateDepartmentParam) -> Result<Department, AppError> {
        let repo = DepartmentRepository::new(self.db);

        let existing = repo.get_by_id(param.id).await?.ok_or_else(not_found)?;

        param.validate()?;

        if existing.abbreviation != param.abbreviation
            && repo
                .find_by_abbreviation(&param.abbreviation)
                .await?
                .is_some()
        {
            return Err(abbreviation_taken(&param.abbreviation));
        }

        let abbreviation = param.abbreviation.clone();
        repo.update(param).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => not_found(),
            e => constraint_conflict(e, || abbreviation_taken_message(&abbreviation)),
        })
    }

    /// Deletes a department that has no teachers.
    ///
    /// # Returns
    /// - `Ok(())` - Department deleted
    /// - `Err(AppError::NotFound)` - No department with that id
    /// - `Err(AppError::Conflict)` - Teachers still belong to the department
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DepartmentRepository::new(self.db);

        let department = repo.get_by_id(id).await?.ok_or_else(not_found)?;

        let in_use = repo.get_teacher_count(id).await?;
        if in_use > 0 {
            return Err(AppError::Conflict(in_use_message(
                &department.abbreviation,
                in_use,
            )));
        }

        let deleted = repo
            .delete(id)
            .await
            .map_err(|e| constraint_conflict(e, || in_use_message(&department.abbreviation, 1)))?;

        if !deleted {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Department not found".to_string())
}

fn abbreviation_taken_message(abbreviation: &str) -> String {
    format!(
        "Department with abbreviation '{}' already exists",
        abbreviation
    )
}

fn abbreviation_taken(abbreviation: &str) -> AppError {
    AppError::Conflict(abbreviation_taken_message(abbreviation))
}

fn in_use_message(abbreviation: &str, teachers: u64) -> String {
    format!(
        "Cannot delete department '{}': it has {} teacher(s)",
        abbreviation, teachers
    )
}
