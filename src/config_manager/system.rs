use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// System configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl SystemConfig {
    /// Apply `HOST` / `PORT` environment overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok());
    }

    fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) {
        if let Some(host) = host {
            if !host.is_empty() {
                self.host = host;
            }
        }
        if let Some(port) = port {
            match port.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
    }

    /// Resolve the listen address. Hostnames go through the system
    /// resolver; a host that does not resolve is a start-up error.
    pub async fn resolve_addr(&self) -> Result<SocketAddr> {
        let mut addrs = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("Failed to resolve listen host: {}", self.host))?;
        addrs
            .next()
            .ok_or_else(|| anyhow::anyhow!("Listen host resolved to no addresses: {}", self.host))
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, port: u16) -> SystemConfig {
        SystemConfig {
            host: host.to_string(),
            port,
        }
    }

    #[tokio::test]
    async fn test_resolve_addr_ip_literal() {
        let addr = config("127.0.0.1", 9000).resolve_addr().await.unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:9000");
    }

    #[tokio::test]
    async fn test_resolve_addr_hostname_stays_loopback() {
        let addr = config("localhost", 9000).resolve_addr().await.unwrap();
        assert!(addr.ip().is_loopback());
        assert!(!addr.ip().is_unspecified());
        assert_eq!(addr.port(), 9000);
    }

    #[tokio::test]
    async fn test_resolve_addr_unknown_host_is_error() {
        // `.invalid` is reserved and never resolves.
        let err = config("no-such-host.invalid", 8000).resolve_addr().await.unwrap_err();
        assert!(err.to_string().contains("no-such-host.invalid"));
    }

    #[test]
    fn test_overrides_replace_host_and_port() {
        let mut cfg = SystemConfig::default();
        cfg.apply_overrides(Some("127.0.0.1".to_string()), Some("9100".to_string()));
        assert_eq!(cfg, config("127.0.0.1", 9100));
    }

    #[test]
    fn test_overrides_ignore_empty_host_and_invalid_port() {
        let mut cfg = config("localhost", 8080);
        cfg.apply_overrides(Some(String::new()), Some("not-a-port".to_string()));
        assert_eq!(cfg, config("localhost", 8080));

        cfg.apply_overrides(None, Some("70000".to_string()));
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn test_overrides_absent_keep_values() {
        let mut cfg = config("::1", 1234);
        cfg.apply_overrides(None, None);
        assert_eq!(cfg, config("::1", 1234));
    }
}
