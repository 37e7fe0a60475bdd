use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        degree::{CreateDegreeDto, DegreeDto, UpdateDegreeDto},
    },
    server::{
        controller::parse_id,
        error::AppError,
        model::degree::{CreateDegreeParam, UpdateDegreeParam},
        service::degree::DegreeService,
        state::AppState,
    },
};

/// Tag for grouping degree endpoints in OpenAPI documentation
pub static DEGREE_TAG: &str = "degree";

/// List every degree.
///
/// # Returns
/// - `200 OK` - All degrees in creation order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/degrees",
    tag = DEGREE_TAG,
    responses(
        (status = 200, description = "All degrees", body = Vec<DegreeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_degrees(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let degrees = DegreeService::new(&state.db).get_all().await?;

    let dtos: Vec<DegreeDto> = degrees.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a degree by id.
///
/// # Returns
/// - `200 OK` - The degree
/// - `404 Not Found` - No degree with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/degrees/{id}",
    tag = DEGREE_TAG,
    params(
        ("id" = i32, Path, description = "Degree ID")
    ),
    responses(
        (status = 200, description = "The degree", body = DegreeDto),
        (status = 404, description = "Degree not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_degree(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Degree")?;

    let degree = DegreeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(degree.into_dto())))
}

/// Create a degree.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Degree fields; `name` must not be taken
///
/// # Returns
/// - `201 Created` - The created degree
/// - `400 Bad Request` - Invalid fields or duplicate name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/degrees",
    tag = DEGREE_TAG,
    request_body = CreateDegreeDto,
    responses(
        (status = 201, description = "Successfully created degree", body = DegreeDto),
        (status = 400, description = "Invalid degree data or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_degree(
    State(state): State<AppState>,
    payload: Result<Json<CreateDegreeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let degree = DegreeService::new(&state.db)
        .create(CreateDegreeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(degree.into_dto())))
}

/// Replace a degree's fields.
///
/// # Returns
/// - `200 OK` - The updated degree
/// - `400 Bad Request` - Invalid fields or name taken by another degree
/// - `404 Not Found` - No degree with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/degrees/{id}",
    tag = DEGREE_TAG,
    params(
        ("id" = i32, Path, description = "Degree ID")
    ),
    request_body = UpdateDegreeDto,
    responses(
        (status = 200, description = "Successfully updated degree", body = DegreeDto),
        (status = 400, description = "Invalid degree data or duplicate name", body = ErrorDto),
        (status = 404, description = "Degree not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_degree(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDegreeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Degree")?;
    let Json(payload) = payload?;

    let degree = DegreeService::new(&state.db)
        .update(UpdateDegreeParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(degree.into_dto())))
}

/// Delete a degree no teacher holds.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Teachers still hold the degree
/// - `404 Not Found` - No degree with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/degrees/{id}",
    tag = DEGREE_TAG,
    params(
        ("id" = i32, Path, description = "Degree ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted degree", body = MessageDto),
        (status = 400, description = "Degree is still in use", body = ErrorDto),
        (status = 404, description = "Degree not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_degree(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Degree")?;

    DegreeService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Degree deleted successfully".to_string(),
        }),
    ))
}
