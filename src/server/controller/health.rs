/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - Plain-text confirmation that the server is running
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain")
    ),
)]
pub async fn liveness() -> &'static str {
    "Faculty registry API is running"
}
