//! bookshelf-server: HTTP API server for the Bookshelf API
//!
//! This crate provides:
//! - REST API endpoints for the notes and books collections
//! - The JSON response envelope shared by every endpoint
//! - Request-id and CORS middleware wiring
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation and propagation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookshelf_server::{config::ServerConfig, routes, state::AppState};
//! use bookshelf_store::Store;
//!
//! let config = ServerConfig::from_env()?;
//! let app = routes::build_router(AppState::new(Store::new(), config));
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use response::Envelope;
pub use state::AppState;

// Re-export dependent crates
pub use bookshelf_core;
pub use bookshelf_store;
