use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{
        degree::{CreateDegreeParam, UpdateDegreeParam},
        department::{CreateDepartmentParam, UpdateDepartmentParam},
        teacher::{CreateTeacherParam, TeacherKey, UpdateTeacherParam},
    },
    service::{
        degree::DegreeService, department::DepartmentService, statistics::StatisticsService,
        teacher::TeacherService,
    },
};


fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Inserts department `CNTT` and degree `Thạc sĩ` through the services.
async fn seed_references(db: &DatabaseConnection) -> Result<(), AppError> {
    DepartmentService::new(db)
        .create(CreateDepartmentParam {
            full_name: "Khoa Công nghệ thông tin".to_string(),
            abbreviation: "CNTT".to_string(),
        })
        .await?;
    DegreeService::new(db)
        .create(CreateDegreeParam {
            name: "Thạc sĩ".to_string(),
            coefficient: 1.2,
            specialization: "CNTT".to_string(),
            issue_date: date(2020, 1, 1),
        })
        .await?;
    Ok(())
}

fn teacher_param(teacher_id: &str, email: &str) -> CreateTeacherParam {
    CreateTeacherParam {
        teacher_id: teacher_id.to_string(),
        full_name: "Nguyen Van A".to_string(),
        date_of_birth: date(1990, 1, 1),
        department: "CNTT".to_string(),
        degree: "Thạc sĩ".to_string(),
        email: email.to_string(),
        phone_number: "0912345678".to_string(),
        join_date: date(2021, 1, 1),
    }
}
