use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::validation::Validate,
    server::{
        data::degree::DegreeRepository,
        error::AppError,
        model::degree::{CreateDegreeParam, Degree, UpdateDegreeParam},
        service::constraint_conflict,
    },
};

pub struct DegreeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DegreeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Degree>, AppError> {
        Ok(DegreeRepository::new(self.db).get_all().await?)
    }

    /// Gets a degree by id, failing with `NotFound` when absent.
    pub async fn get_by_id(&self, id: i32) -> Result<Degree, AppError> {
        DegreeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a degree after checking the field rules and that the name is free.
    pub async fn create(&self, param: CreateDegreeParam) -> Result<Degree, AppError> {
        param.validate()?;

        let repo = DegreeRepository::new(self.db);

        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(name_taken(&param.name));
        }

        let name = param.name.clone();
        let degree = repo
            .create(param)
            .await
            .map_err(|e| constraint_conflict(e, || name_taken_message(&name)))?;

        tracing::debug!("Created degree {} ({})", degree.id, degree.name);

        Ok(degree)
    }

    /// Replaces a degree. The name is re-checked only when it changes.
    pub async fn update(&self, param: UpdateDegreeParam) -> Result<Degree, AppError> {
        let repo = DegreeRepository::new(self.db);

        let existing = repo.get_by_id(param.id).await?.ok_or_else(not_found)?;

        param.validate()?;

        if existing.name != param.name && repo.find_by_name(&param.name).await?.is_some() {
            return Err(name_taken(&param.name));
        }

        let name = param.name.clone();
        repo.update(param).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => not_found(),
            e => constraint_conflict(e, || name_taken_message(&name)),
        })
    }

    /// Deletes a degree that no teacher holds.
    ///
    /// # Returns
    /// - `Ok(())` - Degree deleted
    /// - `Err(AppError::NotFound)` - No degree with that id
    /// - `Err(AppError::Conflict)` - Teachers still hold the degree
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DegreeRepository::new(self.db);

        let degree = repo.get_by_id(id).await?.ok_or_else(not_found)?;

        let in_use = repo.get_teacher_count(id).await?;
        if in_use > 0 {
            return Err(AppError::Conflict(in_use_message(&degree.name, in_use)));
        }

        let deleted = repo
            .delete(id)
            .await
            .map_err(|e| constraint_conflict(e, || in_use_message(&degree.name, 1)))?;

        if !deleted {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Degree not found".to_string())
}

fn name_taken_message(name: &str) -> String {
    format!("Degree with name '{}' already exists", name)
}

fn name_taken(name: &str) -> AppError {
    AppError::Conflict(name_taken_message(name))
}

fn in_use_message(name: &str, teachers: u64) -> String {
    format!(
        "Cannot delete degree '{}': it is held by {} teacher(s)",
        name, teachers
    )
}
