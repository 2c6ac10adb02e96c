//! # HTTP Server Module
//!
//! HTTP API for the voter registry. Combines all endpoint routers into a
//! unified Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/users/*` - Voter records, lookups and statistics
//! - `/docs`, `/docs.json` - API documentation

pub mod config;
pub mod docs_routes;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;
pub mod voter_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult};
pub use response::ApiResponse;
pub use server::{build_router, HttpServer};
pub use voter_routes::VoterState;
