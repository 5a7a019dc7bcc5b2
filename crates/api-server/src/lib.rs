//! Multibagger Radar API server.
//!
//! Serves the screening dashboard's data: the stock universe, analysis cards
//! and screen results for a given control state.

pub mod cache;
pub mod cards;
pub mod config;
mod openapi;
mod request_id;
mod screener_routes;
mod security_headers;
mod stock_routes;


use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, State},
    http::{HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Datelike;
use radar_core::RadarError;
use serde::Serialize;
use stock_universe::StockUniverse;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use cache::AnalysisCache;
use cards::DisplayFormat;
use config::ServerConfig;

/// Response envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Handler error: an HTTP status plus the underlying cause.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    error: anyhow::Error,
}

impl AppError {
    pub fn with_status(status: StatusCode, error: anyhow::Error) -> Self {
        Self { status, error }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let error: anyhow::Error = err.into();
        let status = match error.downcast_ref::<RadarError>() {
            Some(RadarError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Some(RadarError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, error }
    }
}

/// Malformed query strings answer 400 inside the usual envelope.
pub(crate) fn bad_query(rejection: QueryRejection) -> AppError {
    AppError::with_status(StatusCode::BAD_REQUEST, anyhow::Error::new(rejection))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.error);
        } else {
            tracing::warn!("Request rejected ({}): {}", self.status, self.error);
        }
        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self.error.to_string()),
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub universe: Arc<StockUniverse>,
    pub cache: Arc<AnalysisCache>,
    pub format: DisplayFormat,
    base_year: Option<i32>,
}

impl AppState {
    pub fn new(universe: StockUniverse, cache_capacity: usize) -> Self {
        Self {
            universe: Arc::new(universe),
            cache: Arc::new(AnalysisCache::new(cache_capacity)),
            format: DisplayFormat::default(),
            base_year: None,
        }
    }

    /// Pin the projection base year instead of reading the clock.
    pub fn with_base_year(mut self, year: i32) -> Self {
        self.base_year = Some(year);
        self
    }

    pub fn base_year(&self) -> i32 {
        self.base_year.unwrap_or_else(|| chrono::Utc::now().year())
    }
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    stocks: usize,
}

async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(HealthStatus {
        status: "ok",
        stocks: state.universe.len(),
    }))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([axum::http::Method::GET])
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(stock_routes::stock_routes())
        .merge(screener_routes::screener_routes())
        .merge(openapi::openapi_routes())
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            config.enable_hsts,
            security_headers::security_headers_middleware,
        ))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(cors_layer(config))
}

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;
    let universe = StockUniverse::embedded()?;
    tracing::info!(
        "Loaded {} stocks across {} sectors",
        universe.len(),
        universe.sectors().len()
    );

    let state = AppState::new(universe, config.cache_capacity);
    let app = build_router(state, &config);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Multibagger Radar API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
