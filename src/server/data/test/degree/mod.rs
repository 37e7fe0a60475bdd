use crate::server::{
    data::degree::DegreeRepository,
    model::degree::{CreateDegreeParam, UpdateDegreeParam},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod get_all;
mod get_teacher_count;
mod update;

fn param(name: &str) -> CreateDegreeParam {
    CreateDegreeParam {
        name: name.to_string(),
        coefficient: 1.2,
        specialization: "Computer Science".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    }
}
