use crate::models::ServiceStatus;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET / handler - Health check endpoint
///
/// Returns a fixed payload identifying the service. Reads no input and has
/// no side effects.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is healthy", body = ServiceStatus)
    ),
    tag = "health"
)]
pub async fn root_handler() -> (StatusCode, Json<ServiceStatus>) {
    (
        StatusCode::OK,
        Json(ServiceStatus {
            status: "healthy".to_string(),
            service: "CoffeeShop LLM".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_endpoint() {
        let app = Router::new().route(crate::routes::ROOT, get(root_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            &body[..],
            br#"{"status":"healthy","service":"CoffeeShop LLM"}"#
        );
    }

    #[tokio::test]
    async fn test_root_endpoint_ignores_query_string() {
        let app = Router::new().route(crate::routes::ROOT, get(root_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/?verbose=true")
                    .header("x-extra", "ignored")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: ServiceStatus = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.service, "CoffeeShop LLM");
    }
}
