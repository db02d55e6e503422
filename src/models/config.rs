//! Configuration module for the shipping proxy
//!
//! Values come from the environment once at startup and are then passed
//! explicitly into the service and the GHN client.

use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_PORT, DEFAULT_UPSTREAM_TIMEOUT_SECS, GHN_BASE_URL_DEVELOPMENT, GHN_BASE_URL_PRODUCTION,
};

/// GHN deployment target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GhnEnvironment {
    Production,
    #[default]
    Development,
}

impl GhnEnvironment {
    /// Parse from `GHN_ENV`; anything unrecognized is development
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => GHN_BASE_URL_PRODUCTION,
            Self::Development => GHN_BASE_URL_DEVELOPMENT,
        }
    }
}

/// Credentials and endpoint for the GHN API
#[derive(Clone)]
pub struct GhnConfig {
    /// API token; empty means mock-only mode
    pub token: String,
    /// Numeric shop identifier sent as `ShopId`
    pub shop_id: i64,
    /// Gateway base URL (production or sandbox)
    pub base_url: String,
    /// Timeout for each upstream call
    pub timeout: Duration,
}

impl GhnConfig {
    pub fn new(token: impl Into<String>, shop_id: i64, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            shop_id,
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }

    /// Config with no token, always served from mock data
    pub fn mock_only() -> Self {
        Self::new("", 0, GhnEnvironment::Development.base_url())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `GHN_API_TOKEN`, `GHN_SHOP_ID`, `GHN_BASE_URL` / `GHN_ENV`
    /// and `GHN_TIMEOUT_SECS`.
    /// Token is never logged.
    pub fn from_env() -> AppResult<Self> {
        let token = std::env::var("GHN_API_TOKEN")
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        let shop_id = match std::env::var("GHN_SHOP_ID") {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<i64>().map_err(|_| {
                AppError::invalid_config(format!("GHN_SHOP_ID must be an integer, got '{}'", raw))
            })?,
            _ => 0,
        };

        let base_url = std::env::var("GHN_BASE_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| {
                let env = std::env::var("GHN_ENV").unwrap_or_default();
                GhnEnvironment::from_name(&env).base_url().to_string()
            });

        let timeout_secs = std::env::var("GHN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        let config = Self::new(token, shop_id, base_url).with_timeout(Duration::from_secs(timeout_secs));

        if config.is_configured() {
            info!("🔑 GHN_API_TOKEN configured (token hidden), shop {}, {}", config.shop_id, config.base_url);
        } else {
            warn!("GHN_API_TOKEN not configured, serving mock data only");
        }

        Ok(config)
    }

    /// True when a token is present
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}

impl std::fmt::Debug for GhnConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhnConfig")
            .field("token", &if self.token.is_empty() { "<empty>" } else { "***HIDDEN***" })
            .field("shop_id", &self.shop_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `SHIPPING_HOST`, then `PORT` (PaaS convention) or `SHIPPING_PORT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("SHIPPING_HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORT")
            .or_else(|_| std::env::var("SHIPPING_PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }

    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| AppError::invalid_config(format!("Invalid listen address {}:{}", self.host, self.port)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_selection() {
        assert_eq!(GhnEnvironment::from_name("production"), GhnEnvironment::Production);
        assert_eq!(GhnEnvironment::from_name(" PROD "), GhnEnvironment::Production);
        assert_eq!(GhnEnvironment::from_name(""), GhnEnvironment::Development);
        assert_eq!(GhnEnvironment::Production.base_url(), "https://online-gateway.ghn.vn");
    }

    #[test]
    fn test_mock_only_is_not_configured() {
        let config = GhnConfig::mock_only();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, GHN_BASE_URL_DEVELOPMENT);
    }

    #[test]
    fn test_debug_hides_token() {
        let config = GhnConfig::new("secret-token", 123, GHN_BASE_URL_DEVELOPMENT);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("***HIDDEN***"));
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 9000);

        let bad = ServerConfig {
            host: "not a host".to_string(),
            port: 9000,
        };
        assert!(bad.socket_addr().is_err());
    }
}
