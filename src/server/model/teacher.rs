//! Parameter models for teacher operations.
//!
//! Requests name a teacher's department by abbreviation and degree by name. The service
//! resolves both to primary keys before anything is written, so repositories only ever see
//! `department_id`/`degree_id`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    teacher::{CreateTeacherDto, TeacherDto, UpdateTeacherDto},
    validation::{required, teacher_rules, Validate, ValidationErrors},
};

/// A teacher joined with the abbreviation and name of what it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: i32,
    pub teacher_id: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub department_id: i32,
    pub department: String,
    pub degree_id: i32,
    pub degree: String,
    pub email: String,
    pub phone_number: String,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    /// Builds the domain model from a teacher row plus the current abbreviation and name of
    /// its department and degree.
    pub fn from_entity(
        entity: entity::teacher::Model,
        department: impl Into<String>,
        degree: impl Into<String>,
    ) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            full_name: entity.full_name,
            date_of_birth: entity.date_of_birth,
            department_id: entity.department_id,
            department: department.into(),
            degree_id: entity.degree_id,
            degree: degree.into(),
            email: entity.email,
            phone_number: entity.phone_number,
            join_date: entity.join_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            id: self.id,
            teacher_id: self.teacher_id,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            department: self.department,
            degree: self.degree,
            email: self.email,
            phone_number: self.phone_number,
            join_date: self.join_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// How a teacher is addressed in a URL: generated key or staff code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeacherKey {
    Id(i32),
    Code(String),
}

impl TeacherKey {
    /// Numeric keys address the generated id, anything else the staff code.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Code(raw.to_string()),
        }
    }
}

impl std::fmt::Display for TeacherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Code(code) => write!(f, "{}", code),
        }
    }
}

/// Parameters for creating a teacher. Strings are trimmed and the email lower-cased.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTeacherParam {
    pub teacher_id: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    /// Department abbreviation.
    pub department: String,
    /// Degree name.
    pub degree: String,
    pub email: String,
    pub phone_number: String,
    pub join_date: NaiveDate,
}

impl CreateTeacherParam {
    pub fn from_dto(dto: CreateTeacherDto) -> Self {
        Self {
            teacher_id: dto.teacher_id.trim().to_string(),
            full_name: dto.full_name.trim().to_string(),
            date_of_birth: dto.date_of_birth,
            department: dto.department.trim().to_string(),
            degree: dto.degree.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            phone_number: dto.phone_number.trim().to_string(),
            join_date: dto.join_date,
        }
    }
}

impl Validate for CreateTeacherParam {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = teacher_rules(
            &self.full_name,
            &self.department,
            &self.degree,
            &self.email,
            &self.phone_number,
        );
        required(&mut errors, "teacherId", &self.teacher_id);
        errors.into_result()
    }
}

/// Parameters for replacing a teacher's editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTeacherParam {
    pub key: TeacherKey,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub department: String,
    pub degree: String,
    pub email: String,
    pub phone_number: String,
    pub join_date: NaiveDate,
}

impl UpdateTeacherParam {
    pub fn from_dto(key: TeacherKey, dto: UpdateTeacherDto) -> Self {
        Self {
            key,
            full_name: dto.full_name.trim().to_string(),
            date_of_birth: dto.date_of_birth,
            department: dto.department.trim().to_string(),
            degree: dto.degree.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            phone_number: dto.phone_number.trim().to_string(),
            join_date: dto.join_date,
        }
    }
}

impl Validate for UpdateTeacherParam {
    fn validate(&self) -> Result<(), ValidationErrors> {
        teacher_rules(
            &self.full_name,
            &self.department,
            &self.degree,
            &self.email,
            &self.phone_number,
        )
        .into_result()
    }
}

/// Column values written for a teacher once references are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherRecord {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub department_id: i32,
    pub degree_id: i32,
    pub email: String,
    pub phone_number: String,
    pub join_date: NaiveDate,
}
