use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    degree::{CreateDegreeDto, DegreeDto, UpdateDegreeDto},
    validation::{degree_rules, Validate, ValidationErrors},
};

/// A degree record as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Degree {
    pub id: i32,
    pub name: String,
    pub coefficient: f64,
    pub specialization: String,
    pub issue_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Degree {
    pub fn from_entity(entity: entity::degree::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            coefficient: entity.coefficient,
            specialization: entity.specialization,
            issue_date: entity.issue_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DegreeDto {
        DegreeDto {
            id: self.id,
            name: self.name,
            coefficient: self.coefficient,
            specialization: self.specialization,
            issue_date: self.issue_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a degree. Strings are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDegreeParam {
    pub name: String,
    pub coefficient: f64,
    pub specialization: String,
    pub issue_date: NaiveDate,
}

impl CreateDegreeParam {
    pub fn from_dto(dto: CreateDegreeDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            coefficient: dto.coefficient,
            specialization: dto.specialization.trim().to_string(),
            issue_date: dto.issue_date,
        }
    }
}

impl Validate for CreateDegreeParam {
    fn validate(&self) -> Result<(), ValidationErrors> {
        degree_rules(&self.name, self.coefficient, &self.specialization)
    }
}

/// Parameters for replacing a degree's fields. Strings are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDegreeParam {
    pub id: i32,
    pub name: String,
    pub coefficient: f64,
    pub specialization: String,
    pub issue_date: NaiveDate,
}

impl UpdateDegreeParam {
    pub fn from_dto(id: i32, dto: UpdateDegreeDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            coefficient: dto.coefficient,
            specialization: dto.specialization.trim().to_string(),
            issue_date: dto.issue_date,
        }
    }
}

impl Validate for UpdateDegreeParam {
    fn validate(&self) -> Result<(), ValidationErrors> {
        degree_rules(&self.name, self.coefficient, &self.specialization)
    }
}
