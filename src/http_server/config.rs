//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.
//! Loaded from an optional JSON file; missing keys take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: HttpServerConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde alone cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }

        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }

        for origin in &self.cors_origins {
            validate_origin(origin)?;
        }

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// An origin is `scheme://host[:port]` with an http(s) scheme and no path
fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid =
        |reason: &str| ConfigError::Invalid(format!("CORS origin '{}' {}", origin, reason));

    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| invalid("must start with http:// or https://"))?;

    if host.is_empty() || host.contains('/') {
        return Err(invalid("must be scheme://host[:port] with no path"));
    }

    HeaderValue::from_str(origin).map_err(|_| invalid("is not a valid header value"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 4100}}"#).unwrap();

        let config = HttpServerConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 4100);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_load_rejects_zero_port() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 0}}"#).unwrap();

        let err = HttpServerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validate_accepts_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "https://vote.example.org".to_string(),
            ],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_origins() {
        for origin in [
            "localhost:5173",
            "https://",
            "https://example.org/app",
            "http://bad\nhost",
        ] {
            let config = HttpServerConfig {
                cors_origins: vec!["http://localhost:5173".to_string(), origin.to_string()],
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{} accepted", origin);
        }
    }

    #[test]
    fn test_load_rejects_malformed_origin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cors_origins": ["example.org"]}}"#).unwrap();

        let err = HttpServerConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("example.org"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = HttpServerConfig::load(Path::new("/nonexistent/whoisvoting.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = HttpServerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
