//! Teacher statistics.
//!
//! Statistics are recomputed from a full scan on every request. The aggregation itself is a
//! pure function of the loaded records and the current year so it can be tested without a
//! database.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::statistics::{
        AgeGroupsDto, DegreeStatDto, DepartmentStatDto, JoinYearStatDto, TeacherStatisticsDto,
    },
    server::{
        data::{
            degree::DegreeRepository, department::DepartmentRepository,
            teacher::TeacherRepository,
        },
        error::AppError,
        model::{degree::Degree, department::Department, teacher::Teacher},
    },
};

pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates teacher counts per department, per degree, per age group and per join year.
    pub async fn get_teacher_statistics(&self) -> Result<TeacherStatisticsDto, AppError> {
        let departments = DepartmentRepository::new(self.db).get_all().await?;
        let degrees = DegreeRepository::new(self.db).get_all().await?;
        let teachers = TeacherRepository::new(self.db).get_all().await?;

        Ok(aggregate(
            &departments,
            &degrees,
            &teachers,
            Utc::now().year(),
        ))
    }
}

/// Builds the statistics for `teachers` as of `current_year`.
///
/// Every department and degree appears in the output, including those with no teachers.
/// Age is `current_year - birth year`; join years are listed newest first.
pub fn aggregate(
    departments: &[Department],
    degrees: &[Degree],
    teachers: &[Teacher],
    current_year: i32,
) -> TeacherStatisticsDto {
    let mut per_department: HashMap<i32, u64> = HashMap::new();
    let mut per_degree: HashMap<i32, u64> = HashMap::new();
    let mut per_join_year: BTreeMap<i32, u64> = BTreeMap::new();
    let mut age_groups = AgeGroupsDto::default();

    for teacher in teachers {
        *per_department.entry(teacher.department_id).or_default() += 1;
        *per_degree.entry(teacher.degree_id).or_default() += 1;
        *per_join_year.entry(teacher.join_date.year()).or_default() += 1;

        match current_year - teacher.date_of_birth.year() {
            age if age < 30 => age_groups.under30 += 1,
            age if age < 40 => age_groups.between30_and40 += 1,
            age if age < 50 => age_groups.between40_and50 += 1,
            _ => age_groups.over50 += 1,
        }
    }

    let department_stats = departments
        .iter()
        .map(|d| DepartmentStatDto {
            id: d.id,
            full_name: d.full_name.clone(),
            abbreviation: d.abbreviation.clone(),
            teacher_count: per_department.get(&d.id).copied().unwrap_or(0),
        })
        .collect();

    let degree_stats = degrees
        .iter()
        .map(|d| DegreeStatDto {
            id: d.id,
            name: d.name.clone(),
            teacher_count: per_degree.get(&d.id).copied().unwrap_or(0),
        })
        .collect();

    let join_year_stats = per_join_year
        .into_iter()
        .rev()
        .map(|(year, count)| JoinYearStatDto { year, count })
        .collect();

    TeacherStatisticsDto {
        total_count: teachers.len() as u64,
        department_stats,
        degree_stats,
        age_groups,
        join_year_stats,
    }
}
