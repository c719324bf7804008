use utoipa::OpenApi;

use crate::handlers;
use crate::models::{Health, ServiceStatus};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CoffeeShop LLM Service",
        version = "1.0.0",
        description = "AI-powered backend service for coffee shop recommendations and customer service"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            ServiceStatus,
            Health
        )
    ),
    tags(
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
