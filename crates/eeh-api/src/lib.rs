//! EEH API: HTTP surface for Form 34 assessments
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use eeh_core::AssessmentService;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::ApiConfig;
use metrics::ApiMetrics;

/// Shared handler state; one per process, fresh per test
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AssessmentService>,
    pub metrics: Arc<ApiMetrics>,
}

impl AppState {
    pub fn new(service: AssessmentService) -> Result<Self, prometheus::Error> {
        Ok(Self {
            service: Arc::new(service),
            metrics: Arc::new(ApiMetrics::new()?),
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/assess", post(handlers::assess))
        .route("/result/{token}", get(handlers::get_result))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
        .layer(middleware::trace())
        .layer(middleware::cors())
}

pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run(config: ApiConfig) -> std::io::Result<()> {
    let state = AppState::new(AssessmentService::in_memory())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!("EEH API listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
