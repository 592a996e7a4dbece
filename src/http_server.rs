//! HTTP JSON Server for contentscale
//!
//! This module exposes the content and SEO services as JSON endpoints.
//! Every response carries a `success` flag plus either `data` or `error`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error, info};

use crate::{
    config::AppConfig,
    content::{ContentRequest, ContentService},
    error::{Error, Result},
    mock::{Clock, FixedDelay, Latency, RandomSource, SeededRandom, SystemClock, ThreadRandom},
    seo::SeoResearchService,
};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub seo: Arc<SeoResearchService>,
}

impl AppState {
    pub fn new(content: ContentService, seo: SeoResearchService) -> Self {
        Self {
            content: Arc::new(content),
            seo: Arc::new(seo),
        }
    }

    /// Build production collaborators from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let random: Arc<dyn RandomSource> = match config.simulation.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let content_delay: Arc<dyn Latency> = Arc::new(FixedDelay::new(Duration::from_millis(
            config.simulation.content_delay_ms,
        )));
        let research_delay: Arc<dyn Latency> = Arc::new(FixedDelay::new(Duration::from_millis(
            config.simulation.research_delay_ms,
        )));

        Self::new(
            ContentService::new(Arc::clone(&random), content_delay, Arc::clone(&clock)),
            SeoResearchService::new(random, research_delay, clock, config.seo.clone()),
        )
    }
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            message: Some(message.into()),
            total: None,
        })
    }
}

/// Failure envelope: the underlying error plus an endpoint summary
#[derive(Debug)]
pub struct ApiError {
    pub error: Error,
    pub message: &'static str,
}

impl ApiError {
    pub fn new(error: Error, message: &'static str) -> Self {
        Self { error, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        if self.error.is_validation() {
            debug!("Rejected request: {}", self.error);
        } else {
            error!("{}: {}", self.message, self.error);
        }

        let body = json!({
            "success": false,
            "error": self.error.to_string(),
            "message": self.message,
        });

        (status, Json(body)).into_response()
    }
}

trait Context<T> {
    fn context(self, message: &'static str) -> std::result::Result<T, ApiError>;
}

impl<T> Context<T> for Result<T> {
    fn context(self, message: &'static str) -> std::result::Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e, message))
    }
}

/// Missing, unparsable or empty JSON bodies are all "no data"
fn require_body(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    let Ok(Json(body)) = payload else {
        return Err(Error::validation("No data provided"));
    };
    let empty = match &body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if empty {
        return Err(Error::validation("No data provided"));
    }
    Ok(body)
}

/// Create the application router
pub fn create_router(state: AppState, cors: bool) -> Router {
    let router = Router::new()
        .route("/generate", post(generate_content))
        .route("/history", get(content_history))
        .route("/research", post(seo_research))
        .route("/bulk-research", post(bulk_seo_research))
        .route("/export", post(export_seo_data))
        .route("/trends", get(seo_trends))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http());

    let router = if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

/// POST /generate
async fn generate_content(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    const FAILED: &str = "Failed to generate content";
    let body = require_body(payload).context(FAILED)?;

    let topic = body
        .get("topic")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
    if topic.is_empty() {
        return Err(ApiError::new(Error::validation("Topic is required"), FAILED));
    }
    let mut request = ContentRequest::new(topic);
    if let Some(content_type) = body.get("content_type").and_then(Value::as_str) {
        request = request.with_content_type(content_type);
    }
    let result = state.content.generate(&request).await.context(FAILED)?;

    Ok(ApiResponse::ok(
        result,
        format!("Content generated successfully for topic: {}", topic),
    ))
}

/// GET /history
async fn content_history(State(state): State<AppState>) -> impl IntoResponse {
    let history = state.content.history();
    let total = history.len();
    Json(ApiResponse {
        success: true,
        data: history,
        message: None,
        total: Some(total),
    })
}

/// POST /research
async fn seo_research(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    const FAILED: &str = "Failed to perform SEO research";
    let body = require_body(payload).context(FAILED)?;

    let keyword = state
        .seo
        .validate_keyword(body.get("keyword").and_then(Value::as_str))
        .context(FAILED)?;
    let result = state.seo.research(keyword).await.context(FAILED)?;

    Ok(ApiResponse::ok(
        result,
        format!("SEO research completed for keyword: {}", keyword),
    ))
}

/// POST /bulk-research
async fn bulk_seo_research(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    const FAILED: &str = "Failed to perform bulk SEO research";
    let body = require_body(payload).context(FAILED)?;

    let keywords = body
        .get("keywords")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::validation("Keywords array is required"))
        .context(FAILED)?;
    let result = state.seo.bulk_research(keywords).await.context(FAILED)?;
    let message = format!(
        "Bulk SEO research completed for {} keywords",
        result.processed_count
    );

    Ok(ApiResponse::ok(result, message))
}

/// POST /export
async fn export_seo_data(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    const FAILED: &str = "Failed to export SEO data";
    let body = require_body(payload).context(FAILED)?;

    let data = body.get("data").unwrap_or(&Value::Null);
    let export = state.seo.export_csv(data).context(FAILED)?;

    Ok(ApiResponse::ok(export, "SEO data exported successfully"))
}

/// GET /trends
async fn seo_trends(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::ok(state.seo.trends(), "SEO trends retrieved successfully")
}

/// GET /health
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "contentscale",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

/// Start the HTTP server on the configured address
pub async fn serve(config: &AppConfig) -> Result<()> {
    let state = AppState::from_config(config);
    let app = create_router(state, config.server.cors);

    let listener = TcpListener::bind(&config.server.bind_addr).await?;
    info!("Starting contentscale HTTP server on {}", config.server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
