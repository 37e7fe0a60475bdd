use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TeacherStatisticsDto {
    pub total_count: u64,
    pub department_stats: Vec<DepartmentStatDto>,
    pub degree_stats: Vec<DegreeStatDto>,
    pub age_groups: AgeGroupsDto,
    pub join_year_stats: Vec<JoinYearStatDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStatDto {
    pub id: i32,
    pub full_name: String,
    pub abbreviation: String,
    pub teacher_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DegreeStatDto {
    pub id: i32,
    pub name: String,
    pub teacher_count: u64,
}

/// Teacher counts by age, where age is the current calendar year minus the birth year.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupsDto {
    pub under30: u64,
    pub between30_and40: u64,
    pub between40_and50: u64,
    pub over50: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct JoinYearStatDto {
    pub year: i32,
    pub count: u64,
}
