use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    },
    server::{
        controller::parse_id,
        error::AppError,
        model::department::{CreateDepartmentParam, UpdateDepartmentParam},
        service::department::DepartmentService,
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// List every department.
///
/// # Returns
/// - `200 OK` - All departments in creation order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "All departments", body = Vec<DepartmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_departments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let departments = DepartmentService::new(&state.db).get_all().await?;

    let dtos: Vec<DepartmentDto> = departments.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a department by id.
///
/// # Returns
/// - `200 OK` - The department
/// - `404 Not Found` - No department with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "The department", body = DepartmentDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Department")?;

    let department = DepartmentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Create a department.
///
/// # Returns
/// - `201 Created` - The created department
/// - `400 Bad Request` - Invalid fields or duplicate abbreviation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Successfully created department", body = DepartmentDto),
        (status = 400, description = "Invalid department data or duplicate abbreviation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    payload: Result<Json<CreateDepartmentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let department = DepartmentService::new(&state.db)
        .create(CreateDepartmentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// Replace a department's fields.
///
/// # Returns
/// - `200 OK` - The updated department
/// - `400 Bad Request` - Invalid fields or abbreviation taken by another department
/// - `404 Not Found` - No department with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Successfully updated department", body = DepartmentDto),
        (status = 400, description = "Invalid department data or duplicate abbreviation", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDepartmentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Department")?;
    let Json(payload) = payload?;

    let department = DepartmentService::new(&state.db)
        .update(UpdateDepartmentParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Delete a department that has no teachers.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Teachers still belong to the department
/// - `404 Not Found` - No department with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted department", body = MessageDto),
        (status = 400, description = "Department still has teachers", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Department")?;

    DepartmentService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Department deleted successfully".to_string(),
        }),
    ))
}
