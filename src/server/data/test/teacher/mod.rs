use crate::server::{data::teacher::TeacherRepository, model::teacher::TeacherRecord};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod get;
mod update;

fn record(department_id: i32, degree_id: i32, email: &str) -> TeacherRecord {
    TeacherRecord {
        full_name: "Nguyen Van A".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        department_id,
        degree_id,
        email: email.to_string(),
        phone_number: "0912345678".to_string(),
        join_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
    }
}
