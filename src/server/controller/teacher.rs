use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        teacher::{CreateTeacherDto, TeacherDto, UpdateTeacherDto},
    },
    server::{
        error::AppError,
        model::teacher::{CreateTeacherParam, TeacherKey, UpdateTeacherParam},
        service::teacher::TeacherService,
        state::AppState,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

/// List every teacher.
///
/// Each teacher carries the current abbreviation of its department and name of its degree.
///
/// # Returns
/// - `200 OK` - All teachers in creation order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "All teachers", body = Vec<TeacherDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teachers = TeacherService::new(&state.db).get_all().await?;

    let dtos: Vec<TeacherDto> = teachers.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a teacher by generated id or staff code.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `key` - Numeric generated id, or a staff code such as `GV001`
///
/// # Returns
/// - `200 OK` - The teacher
/// - `404 Not Found` - No teacher with that id or code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teachers/{key}",
    tag = TEACHER_TAG,
    params(
        ("key" = String, Path, description = "Teacher ID or staff code")
    ),
    responses(
        (status = 200, description = "The teacher", body = TeacherDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = TeacherService::new(&state.db)
        .get(&TeacherKey::parse(&key))
        .await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Create a teacher.
///
/// The department is named by abbreviation and the degree by name; both must exist. The staff
/// code may be sent as `teacherId` or `id`.
///
/// # Returns
/// - `201 Created` - The created teacher
/// - `400 Bad Request` - Invalid fields, unknown department/degree, or staff code/email taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Successfully created teacher", body = TeacherDto),
        (status = 400, description = "Invalid teacher data, unknown reference or duplicate", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeacherDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let teacher = TeacherService::new(&state.db)
        .create(CreateTeacherParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(teacher.into_dto())))
}

/// Replace a teacher's editable fields. The staff code never changes.
///
/// # Returns
/// - `200 OK` - The updated teacher
/// - `400 Bad Request` - Invalid fields, unknown department/degree, or email taken
/// - `404 Not Found` - No teacher with that id or code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/teachers/{key}",
    tag = TEACHER_TAG,
    params(
        ("key" = String, Path, description = "Teacher ID or staff code")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Successfully updated teacher", body = TeacherDto),
        (status = 400, description = "Invalid teacher data, unknown reference or duplicate email", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<UpdateTeacherDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let teacher = TeacherService::new(&state.db)
        .update(UpdateTeacherParam::from_dto(TeacherKey::parse(&key), payload))
        .await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Delete a teacher.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No teacher with that id or code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/teachers/{key}",
    tag = TEACHER_TAG,
    params(
        ("key" = String, Path, description = "Teacher ID or staff code")
    ),
    responses(
        (status = 200, description = "Successfully deleted teacher", body = MessageDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    TeacherService::new(&state.db)
        .delete(&TeacherKey::parse(&key))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Teacher deleted successfully".to_string(),
        }),
    ))
}
