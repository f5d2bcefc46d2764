//! HTTP surface: router assembly, handlers, and the error-to-response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use pf_app::{AppError, AppResult, PipelineRequest, PipelineResponse, analyze_pipeline, sample_pipeline};

/// Assemble the application router.
///
/// `frontend_origin` is the single origin granted cross-origin access;
/// methods and headers are mirrored from the request so the editor can
/// send whatever it likes, and credentials are allowed.
pub fn router(frontend_origin: &str) -> AppResult<Router> {
    let origin = frontend_origin.parse::<HeaderValue>().map_err(|e| {
        AppError::Config(format!("invalid frontend origin '{frontend_origin}': {e}"))
    })?;

    // A wildcard cannot be combined with credentials, so the allowed
    // methods/headers mirror each request instead.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/pipelines/parse", post(parse_pipeline))
        .route("/pipelines/test", get(test_pipeline))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Service-layer error wrapped for HTTP: validation problems surface as
/// client errors with their diagnostic, everything else is logged and
/// masked behind a generic 500.
struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            err => {
                error!("pipeline request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error parsing pipeline".to_string(),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Service metadata.
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the pipeflow pipeline parser API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "parse_pipeline": "POST /pipelines/parse",
            "test_pipeline": "GET /pipelines/test",
            "health": "GET /health"
        }
    }))
}

/// Liveness probe.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Analyze a submitted pipeline: counts plus the DAG verdict.
///
/// The extractor result is taken directly so a body that fails to parse
/// still produces the JSON `detail` error shape instead of axum's plain
/// text rejection.
async fn parse_pipeline(
    payload: Result<Json<PipelineRequest>, JsonRejection>,
) -> Result<Json<PipelineResponse>, ApiError> {
    let Json(request) = payload.map_err(|err| AppError::Validation(err.body_text()))?;
    let response = analyze_pipeline(&request)?;
    Ok(Json(response))
}

/// Smoke test: run the fixed sample pipeline through the same analysis
/// path as `POST /pipelines/parse` and echo both payload and result.
async fn test_pipeline() -> Result<Json<Value>, ApiError> {
    let request = sample_pipeline();
    let analysis = analyze_pipeline(&request)?;
    Ok(Json(json!({
        "test_data": request,
        "analysis": analysis
    })))
}
