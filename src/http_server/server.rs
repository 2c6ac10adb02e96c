//! # HTTP Server
//!
//! Combines the voter, health and docs routers into one Axum service.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::docs_routes::docs_routes;
use super::health_routes::health_routes;
use super::response::ApiResponse;
use super::voter_routes::{voter_routes, VoterState};

/// HTTP server for the voter registration API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and an empty store
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(VoterState::in_memory()))
    }

    /// Create a new HTTP server over an existing voter store
    pub fn with_state(config: HttpServerConfig, state: Arc<VoterState>) -> Self {
        let router = build_router(&config, state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;

        tracing::info!(%addr, "WhoIsVoting server listening");
        tracing::info!("Health check: http://{}/health", addr);
        tracing::info!("API docs: http://{}/docs", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, state: Arc<VoterState>) -> Router {
    let routes = Router::new()
        .merge(health_routes())
        .merge(docs_routes())
        .nest("/api", voter_routes(state))
        .fallback(not_found_handler);

    with_middleware(routes, config)
}

/// Panic recovery, security headers, request tracing and CORS.
/// The header layers sit outside panic recovery so 500s carry them too.
fn with_middleware(routes: Router, config: &HttpServerConfig) -> Router {
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    let origin = if config.cors_origins.is_empty() {
        AllowOrigin::from(AnyOrigin)
    } else {
        // Loaded configs are validated already; this only guards direct callers.
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %s, "ignoring malformed CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin)
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("The requested endpoint does not exist")),
    )
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure("Something went wrong!")),
    )
        .into_response()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
