//! Server configuration

use serde::{Deserialize, Serialize};

/// Environment variable overriding the listening port.
pub const LISTEN_PORT_ENV: &str = "LISTEN_PORT";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Path to the extraction script executable
    pub script_path: String,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            script_path: "/scripts/extractor.sh".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides. An unparsable value keeps the configured
    /// port, matching the original container behavior.
    pub fn apply_env(&mut self) {
        if let Ok(value) = std::env::var(LISTEN_PORT_ENV) {
            match value.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!(
                    "Ignoring unparsable {}={:?}, keeping port {}",
                    LISTEN_PORT_ENV,
                    value,
                    self.port
                ),
            }
        }
    }
}
