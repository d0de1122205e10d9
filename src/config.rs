//! Environment-based configuration
//!
//! All settings come from environment variables (a `.env` file is honored by
//! the binary before this runs). The resulting `Config` is built once at
//! startup and passed to the server explicitly; there is no process-wide
//! mutable configuration state.

use std::env;

use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_UPSTREAM_API: &str = "http://ip-api.com/json";

/// Listen address settings.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream geolocation provider settings.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    /// Base URL; the looked-up address is appended as a path segment.
    pub endpoint: String,
}

/// Logging settings.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. "info" or "ipinfod=debug"
    pub level: String,
    /// Log file path; empty or unset means stdout
    pub file: Option<String>,
    /// "json" for JSON lines, anything else for plain fmt output
    pub format: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: parse_port(env::var("PORT").ok()),
            },
            upstream: UpstreamConfig {
                endpoint: parse_endpoint(env::var("UPSTREAM_API").ok()),
            },
            logging: LoggingConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                file: env::var("LOG_FILE").ok(),
                format: env::var("LOG_FORMAT").unwrap_or_else(|_| "plain".to_string()),
            },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Parse the PORT variable; a non-numeric value falls back to the default.
fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!("Invalid PORT value \"{}\", using {}", value, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}

/// Normalize the upstream endpoint (no trailing slash).
fn parse_endpoint(raw: Option<String>) -> String {
    let endpoint = raw.unwrap_or_else(|| DEFAULT_UPSTREAM_API.to_string());
    endpoint.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_default() {
        assert_eq!(parse_port(None), 8000);
    }

    #[test]
    fn test_parse_port_explicit() {
        assert_eq!(parse_port(Some("9090".to_string())), 9090);
    }

    #[test]
    fn test_parse_port_invalid_falls_back() {
        assert_eq!(parse_port(Some("not-a-port".to_string())), 8000);
        assert_eq!(parse_port(Some("70000".to_string())), 8000);
    }

    #[test]
    fn test_parse_endpoint_default() {
        assert_eq!(parse_endpoint(None), "http://ip-api.com/json");
    }

    #[test]
    fn test_parse_endpoint_strips_trailing_slash() {
        assert_eq!(
            parse_endpoint(Some("http://example.com/json/".to_string())),
            "http://example.com/json"
        );
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            upstream: UpstreamConfig {
                endpoint: DEFAULT_UPSTREAM_API.to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
                format: "plain".to_string(),
            },
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
