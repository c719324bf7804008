use serde::{Deserialize, Serialize};

/// Response type for the root health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

/// Response type for the monitoring health endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct Health {
    pub status: String,
}
