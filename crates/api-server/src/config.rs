use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Server settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum number of memoized analysis passes
    pub cache_capacity: usize,
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
    pub enable_hsts: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cache_capacity: 256,
            allowed_origins: Vec::new(),
            enable_hsts: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            host: env::var("RADAR_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("RADAR_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("RADAR_PORT must be a port number")?,
            cache_capacity: env::var("RADAR_CACHE_CAPACITY")
                .unwrap_or_else(|_| "256".to_string())
                .parse()
                .context("RADAR_CACHE_CAPACITY must be a non-negative integer")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            enable_hsts: env::var("ENABLE_HSTS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        };
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:5173, https://radar.example.com ,"),
            vec!["http://localhost:5173", "https://radar.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_default_socket_addr() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }
}
