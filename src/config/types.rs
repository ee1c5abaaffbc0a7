//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::PaySetting;

/// HTTP server settings from `server.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` address to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// HTTP server settings.
    server: ServerConfig,
    /// Pay-rule defaults for tenants without a stored pay setting.
    pay_rule_defaults: PaySetting,
}

impl EngineConfig {
    /// Creates a configuration from its component parts.
    pub fn new(server: ServerConfig, pay_rule_defaults: PaySetting) -> Self {
        Self {
            server,
            pay_rule_defaults,
        }
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the pay-rule defaults.
    pub fn pay_rule_defaults(&self) -> &PaySetting {
        &self.pay_rule_defaults
    }
}
