//! Route table and OpenAPI document.
//!
//! Routes are registered through `utoipa-axum` so the OpenAPI document is built from the same
//! handler annotations that define the routes. The document is served as JSON at
//! `/api/openapi.json`.

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{degree, department, health, statistics, teacher},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Faculty registry API",
        description = "Degrees, departments and teachers of a university faculty"
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "degree", description = "Academic degrees"),
        (name = "department", description = "Organisational units"),
        (name = "teacher", description = "Teaching staff and statistics")
    )
)]
struct ApiDoc;

/// Builds the application router with CORS and request tracing applied.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::liveness))
        .routes(routes!(degree::get_degrees, degree::create_degree))
        .routes(routes!(
            degree::get_degree,
            degree::update_degree,
            degree::delete_degree
        ))
        .routes(routes!(
            department::get_departments,
            department::create_department
        ))
        .routes(routes!(
            department::get_department,
            department::update_department,
            department::delete_department
        ))
        .routes(routes!(teacher::get_teachers, teacher::create_teacher))
        .routes(routes!(statistics::get_teacher_statistics))
        .routes(routes!(
            teacher::get_teacher,
            teacher::update_teacher,
            teacher::delete_teacher
        ))
        .split_for_parts();

    router
        .route(
            "/api/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
