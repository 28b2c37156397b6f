use crate::models::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State};
use http::StatusCode;

/// GET /health handler - Health check endpoint
///
/// Probes the item table to verify store connectivity.
/// Returns 200 OK if the store is reachable, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    match state.store.health_check().await {
        Ok(_) => {
            tracing::debug!("Health check passed ({} store)", state.config.store_backend);
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error: format!("Cannot reach item store: {}", e),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::FailingStore;
    use crate::test_support::{send, setup_test_app, test_state};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let (app, _store) = setup_test_app();

        let (status, _, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        let response_json: HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        let app = routes::app(test_state(Arc::new(FailingStore("connection refused"))));

        let (status, _, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let response_json: UnhealthyResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(response_json.status, "unhealthy");
        assert!(response_json.error.contains("connection refused"));
    }
}
