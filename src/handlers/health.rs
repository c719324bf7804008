use crate::models::Health;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Health endpoint for monitoring
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = Health)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<Health>) {
    (
        StatusCode::OK,
        Json(Health {
            status: "ok".to_string(),
        }),
    )
}
