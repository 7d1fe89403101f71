use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Always returns `{"status": "ok"}` while the process is running; it does
    /// not depend on the OpenAI credential being configured.
    ///
    /// ## Use Cases
    /// - Kubernetes liveness/readiness probes
    /// - Docker health checks
    /// - Load balancer health monitoring
    #[oai(path = "/healthz", method = "get", tag = "ApiTags::Health")]
    async fn healthz(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "ok".to_string(),
        })
    }
}
