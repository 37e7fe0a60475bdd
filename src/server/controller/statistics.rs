use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, statistics::TeacherStatisticsDto},
    server::{
        controller::teacher::TEACHER_TAG, error::AppError,
        service::statistics::StatisticsService, state::AppState,
    },
};

/// Teacher statistics.
///
/// Counts per department and degree (zero counts included), an age histogram and
/// teachers per join year, newest year first. Recomputed on every call.
///
/// # Returns
/// - `200 OK` - Aggregated statistics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teachers/statistics",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Aggregated teacher statistics", body = TeacherStatisticsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_statistics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = StatisticsService::new(&state.db)
        .get_teacher_statistics()
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
