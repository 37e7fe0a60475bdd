use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::validation::{department_rules, Validate, ValidationErrors};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i32,
    pub full_name: String,
    pub abbreviation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentDto {
    pub full_name: String,
    pub abbreviation: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentDto {
    pub full_name: String,
    pub abbreviation: String,
}

impl Validate for CreateDepartmentDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        department_rules(&self.full_name, &self.abbreviation)
    }
}

impl Validate for UpdateDepartmentDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        department_rules(&self.full_name, &self.abbreviation)
    }
}
