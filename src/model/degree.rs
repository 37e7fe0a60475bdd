use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    date::deserialize_date,
    validation::{degree_rules, Validate, ValidationErrors},
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DegreeDto {
    pub id: i32,
    pub name: String,
    pub coefficient: f64,
    pub specialization: String,
    pub issue_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateDegreeDto {
    pub name: String,
    pub coefficient: f64,
    pub specialization: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub issue_date: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateDegreeDto {
    pub name: String,
    pub coefficient: f64,
    pub specialization: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub issue_date: NaiveDate,
}

impl Validate for CreateDegreeDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        degree_rules(&self.name, self.coefficient, &self.specialization)
    }
}

impl Validate for UpdateDegreeDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        degree_rules(&self.name, self.coefficient, &self.specialization)
    }
}
