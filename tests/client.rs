//! Drives a real server on an ephemeral port through `FacultyClient`.
//!
//! Kept as an integration test because it needs both the `server` and `client` features
//! of the built library and a real TCP listener.

#![cfg(all(feature = "server", feature = "client"))]

use chrono::NaiveDate;
use faculty::{
    client::api::FacultyClient,
    model::{
        degree::CreateDegreeDto,
        department::{CreateDepartmentDto, UpdateDepartmentDto},
        teacher::{CreateTeacherDto, UpdateTeacherDto},
    },
    server::{router::router, state::AppState},
};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower_http::cors::CorsLayer;

/// Serves the router over a fresh in-memory database and returns a client pointed at it.
async fn serve() -> (TestContext, FacultyClient) {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap().clone();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new(db), CorsLayer::new());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = FacultyClient::new(format!("http://{}", addr)).unwrap();

    (test, client)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn gv001() -> CreateTeacherDto {
    CreateTeacherDto {
        teacher_id: "GV001".to_string(),
        full_name: "Nguyen Van A".to_string(),
        date_of_birth: date(1990, 1, 1),
        department: "CNTT".to_string(),
        degree: "Thạc sĩ".to_string(),
        email: "a@x.com".to_string(),
        phone_number: "0912345678".to_string(),
        join_date: date(2021, 1, 1),
    }
}

async fn seed(client: &FacultyClient) {
    client
        .create_department(&CreateDepartmentDto {
            full_name: "Khoa Công nghệ thông tin".to_string(),
            abbreviation: "CNTT".to_string(),
        })
        .await
        .unwrap();
    client
        .create_degree(&CreateDegreeDto {
            name: "Thạc sĩ".to_string(),
            coefficient: 1.2,
            specialization: "CNTT".to_string(),
            issue_date: date(2020, 1, 1),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn manages_registry_through_client() {
    let (_test, client) = serve().await;
    seed(&client).await;

    let created = client.create_teacher(&gv001()).await.unwrap();
    assert_eq!(created.teacher_id, "GV001");

    let updated = client
        .update_teacher(
            "GV001",
            &UpdateTeacherDto {
                full_name: "Nguyen Van B".to_string(),
                date_of_birth: created.date_of_birth,
                department: created.department.clone(),
                degree: created.degree.clone(),
                email: created.email.clone(),
                phone_number: created.phone_number.clone(),
                join_date: created.join_date,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.full_name, "Nguyen Van B");

    let stats = client.get_teacher_statistics().await.unwrap();
    assert_eq!(stats.total_count, 1);
    assert_eq!(stats.department_stats[0].teacher_count, 1);

    client.delete_teacher(&created.id.to_string()).await.unwrap();
    assert!(client.get_teachers().await.unwrap().is_empty());
}

#[tokio::test]
async fn surfaces_server_error_messages() {
    let (_test, client) = serve().await;
    seed(&client).await;

    client.create_teacher(&gv001()).await.unwrap();

    let duplicate = client.create_teacher(&gv001()).await.unwrap_err();
    assert_eq!(duplicate.status, 400);
    assert!(duplicate.message.contains("GV001"));

    let missing = client.get_teacher("GV999").await.unwrap_err();
    assert!(missing.is_not_found());
    assert_eq!(missing.message, "Teacher not found");

    let departments = client.get_departments().await.unwrap();
    let in_use = client
        .delete_department(departments[0].id)
        .await
        .unwrap_err();
    assert_eq!(in_use.status, 400);

    let renamed = client
        .update_department(
            departments[0].id,
            &UpdateDepartmentDto {
                full_name: "Khoa CNTT".to_string(),
                abbreviation: "IT".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.abbreviation, "IT");
    assert_eq!(client.get_teacher("GV001").await.unwrap().department, "IT");
}

#[tokio::test]
async fn unreachable_server_is_an_error() {
    let client = FacultyClient::new("http://127.0.0.1:9").unwrap();

    let err = client.get_degrees().await.unwrap_err();

    assert_eq!(err.status, 0);
}
