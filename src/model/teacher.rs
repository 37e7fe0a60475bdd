use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    date::deserialize_date,
    validation::{required, teacher_rules, Validate, ValidationErrors},
};

/// A teacher as returned by the API.
///
/// `id` is the generated key used in URLs; `teacherId` is the human-readable staff code
/// (e.g. `GV001`). `department` and `degree` carry the current abbreviation and name of the
/// referenced records.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    pub id: i32,
    pub teacher_id: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub department: String,
    pub degree: String,
    pub email: String,
    pub phone_number: String,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherDto {
    #[serde(alias = "id")]
    pub teacher_id: String,
    pub full_name: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date_of_birth: NaiveDate,
    /// Abbreviation of an existing department.
    pub department: String,
    /// Name of an existing degree.
    pub degree: String,
    pub email: String,
    pub phone_number: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub join_date: NaiveDate,
}

/// Full replacement of a teacher's editable fields. The staff code cannot change.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherDto {
    pub full_name: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date_of_birth: NaiveDate,
    pub department: String,
    pub degree: String,
    pub email: String,
    pub phone_number: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub join_date: NaiveDate,
}

impl Validate for CreateTeacherDto {
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

impl Validate for UpdateTeacherDto {
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
