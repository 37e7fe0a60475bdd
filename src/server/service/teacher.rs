//! Teacher business logic.
//!
//! Besides the uniqueness checks on staff code and email, every write resolves the
//! department abbreviation and degree name it was given into primary keys. A name that does
//! not resolve is a validation failure, so a teacher can never be stored pointing at nothing.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::validation::Validate,
    server::{
        data::{
            degree::DegreeRepository, department::DepartmentRepository,
            teacher::TeacherRepository,
        },
        error::AppError,
        model::teacher::{
            CreateTeacherParam, Teacher, TeacherKey, TeacherRecord, UpdateTeacherParam,
        },
        service::constraint_conflict,
    },
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).get_all().await?)
    }

    /// Gets a teacher by generated id or staff code.
    pub async fn get(&self, key: &TeacherKey) -> Result<Teacher, AppError> {
        let repo = TeacherRepository::new(self.db);

        let teacher = match key {
            TeacherKey::Id(id) => repo.get_by_id(*id).await?,
            TeacherKey::Code(code) => repo.get_by_code(code).await?,
        };

        teacher.ok_or_else(not_found)
    }

    /// Creates a teacher.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The created teacher
    /// - `Err(AppError::Validation)` - Field rules failed, or the department/degree does not
    ///   exist
    /// - `Err(AppError::Conflict)` - Staff code or email already in use
    pub async fn create(&self, param: CreateTeacherParam) -> Result<Teacher, AppError> {
        param.validate()?;

        let repo = TeacherRepository::new(self.db);

        if repo.exists_with_code(&param.teacher_id).await? {
            return Err(AppError::Conflict(format!(
                "Teacher with teacherId '{}' already exists",
                param.teacher_id
            )));
        }

        if repo.exists_with_email(&param.email, None).await? {
            return Err(email_taken(&param.email));
        }

        let (department_id, degree_id) = self.resolve(&param.department, &param.degree).await?;

        let teacher_id = param.teacher_id;
        let record = TeacherRecord {
            full_name: param.full_name,
            date_of_birth: param.date_of_birth,
            department_id,
            degree_id,
            email: param.email,
            phone_number: param.phone_number,
            join_date: param.join_date,
        };

        let message = format!(
            "Teacher with teacherId '{}' or email '{}' already exists",
            teacher_id, record.email
        );
        let teacher = repo
            .create(teacher_id, record)
            .await
            .map_err(|e| constraint_conflict(e, || message))?;

        tracing::debug!("Created teacher {} ({})", teacher.id, teacher.teacher_id);

        Ok(teacher)
    }

    /// Replaces a teacher's editable fields.
    ///
    /// Department and degree are resolved again even when unchanged. Email uniqueness is
    /// re-checked only when the email changes.
    pub async fn update(&self, param: UpdateTeacherParam) -> Result<Teacher, AppError> {
        let existing = self.get(&param.key).await?;

        param.validate()?;

        let repo = TeacherRepository::new(self.db);

        if existing.email != param.email
            && repo
                .exists_with_email(&param.email, Some(existing.id))
                .await?
        {
            return Err(email_taken(&param.email));
        }

        let (department_id, degree_id) = self.resolve(&param.department, &param.degree).await?;

        let record = TeacherRecord {
            full_name: param.full_name,
            date_of_birth: param.date_of_birth,
            department_id,
            degree_id,
            email: param.email,
            phone_number: param.phone_number,
            join_date: param.join_date,
        };

        let email = record.email.clone();
        repo.update(existing.id, record).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => not_found(),
            e => constraint_conflict(e, || email_taken_message(&email)),
        })
    }

    /// Deletes a teacher by generated id or staff code.
    pub async fn delete(&self, key: &TeacherKey) -> Result<(), AppError> {
        let existing = self.get(key).await?;

        if !TeacherRepository::new(self.db).delete(existing.id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Resolves a department abbreviation and degree name to their primary keys.
    async fn resolve(&self, department: &str, degree: &str) -> Result<(i32, i32), AppError> {
        let department = DepartmentRepository::new(self.db)
            .find_by_abbreviation(department)
            .await?
            .ok_or_else(|| {
                AppError::Validation(format!("Department '{}' does not exist", department))
            })?;

        let degree = DegreeRepository::new(self.db)
            .find_by_name(degree)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Degree '{}' does not exist", degree)))?;

        Ok((department.id, degree.id))
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Teacher not found".to_string())
}

fn email_taken_message(email: &str) -> String {
    format!("Email '{}' is already in use", email)
}

fn email_taken(email: &str) -> AppError {
    AppError::Conflict(email_taken_message(email))
}
