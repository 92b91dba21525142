//! Application state management
//!
//! The only state shared across handlers is the immutable server
//! configuration; requests carry no cross-request state.

use crate::config::ServerConfig;

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Create AppState with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ServerConfig::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_defaults()
    }
}
