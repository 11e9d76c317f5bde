//! Route definitions for the analysis service.
//!
//! Three JSON endpoints: a capability descriptor at the root, the
//! multi-conflict analysis, and the single-conflict projection over it.
//! Plus a health check.

use crate::analysis::schema::{MultiConflictResponse, PolicyText, SingleConflictResponse};
use crate::analysis::{self, AnalysisError};
use crate::provider::Provider;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared application state. Immutable; no state crosses requests.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn Provider>,
}

/// Error body: HTTP status plus free-text detail, no error codes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Capability descriptor returned at the root.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match &self {
            AnalysisError::TextTooShort => StatusCode::BAD_REQUEST,
            AnalysisError::NoConflictFound => StatusCode::NOT_FOUND,
            AnalysisError::Provider(_) | AnalysisError::MalformedReply(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Analysis request failed");
        }

        (
            status,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the API router.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/analyze-multi", post(analyze_multi_handler))
        .route("/analyze", post(analyze_single_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Static capability descriptor.
async fn root_handler() -> Json<ServiceInfo> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert(
        "/analyze-multi".to_string(),
        "POST - Analyze text for multiple goal conflicts with ranking".to_string(),
    );
    endpoints.insert(
        "/analyze".to_string(),
        "POST - Analyze text and return only the primary goal conflict".to_string(),
    );

    Json(ServiceInfo {
        message: format!(
            "ZK-RK Analysis API v{} - Multi-Conflict Detection",
            env!("CARGO_PKG_VERSION")
        ),
        endpoints,
    })
}

/// Analyze policy text and return all goal conflicts, ranked by centrality.
async fn analyze_multi_handler(
    State(state): State<AppState>,
    Json(data): Json<PolicyText>,
) -> Result<Json<MultiConflictResponse>, AnalysisError> {
    let result = analysis::analyze_multi(state.provider.as_ref(), &data).await?;
    Ok(Json(result))
}

/// Return only the primary (most central) conflict, flattened.
async fn analyze_single_handler(
    State(state): State<AppState>,
    Json(data): Json<PolicyText>,
) -> Result<Json<SingleConflictResponse>, AnalysisError> {
    let multi = analysis::analyze_multi(state.provider.as_ref(), &data).await?;

    let primary = multi
        .conflicts
        .into_iter()
        .next()
        .ok_or(AnalysisError::NoConflictFound)?;

    Ok(Json(primary.into()))
}

/// Health check handler.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        service: "zk-analysis".into(),
    })
}
