use crate::server::{
    data::department::DepartmentRepository,
    model::department::{CreateDepartmentParam, UpdateDepartmentParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_abbreviation;
mod get_by_id;
mod update;

fn param(full_name: &str, abbreviation: &str) -> CreateDepartmentParam {
    CreateDepartmentParam {
        full_name: full_name.to_string(),
        abbreviation: abbreviation.to_string(),
    }
}
