use chrono::{DateTime, Utc};

use crate::model::{
    department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    validation::{department_rules, Validate, ValidationErrors},
};

/// A department record as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub full_name: String,
    pub abbreviation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            abbreviation: entity.abbreviation,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            full_name: self.full_name,
            abbreviation: self.abbreviation,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDepartmentParam {
    pub full_name: String,
    pub abbreviation: String,
}

impl CreateDepartmentParam {
    pub fn from_dto(dto: CreateDepartmentDto) -> Self {
        Self {
            full_name: dto.full_name.trim().to_string(),
            abbreviation: dto.abbreviation.trim().to_string(),
        }
    }
}

impl Validate for CreateDepartmentParam {
    fn validate(&self) -> Result<(), ValidationErrors> {
        department_rules(&self.full_name, &self.abbreviation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDepartmentParam {
    pub id: i32,
    pub full_name: String,
    pub abbreviation: String,
}

impl UpdateDepartmentParam {
    pub fn from_dto(id: i32, dto: UpdateDepartmentDto) -> Self {
        Self {
            id,
            full_name: dto.full_name.trim().to_string(),
            abbreviation: dto.abbreviation.trim().to_string(),
        }
    }
}

impl Validate for UpdateDepartmentParam {
    fn validate(&self) -> Result<(), ValidationErrors> {
        department_rules(&self.full_name, &self.abbreviation)
    }
}
