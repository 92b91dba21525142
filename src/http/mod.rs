//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the /extract endpoint (GET + POST)
//! - Request handlers that validate the target path and invoke the script
//! - Plain-text error responses for every failure category

pub mod handlers;
pub mod routes;

pub use routes::create_router;
