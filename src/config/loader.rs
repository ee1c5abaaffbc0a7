//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PaySetting;

use super::types::{EngineConfig, ServerConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/engine/
/// ├── server.yaml     # host/port of the HTTP server
/// └── pay_rules.yaml  # fallback pay-rule defaults
/// ```
///
/// Both files may specify only a subset of their fields; anything omitted
/// falls back to the documented defaults. A missing file is an error — use
/// [`ConfigLoader::default`] to run entirely on defaults.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine").unwrap();
/// println!("Binding {}", loader.config().server().bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::ConfigNotFound`] when a required file is
    /// missing and [`PayrollError::ConfigParseError`] when a file contains
    /// invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;
        let pay_rule_defaults = Self::load_yaml::<PaySetting>(&path.join("pay_rules.yaml"))?;

        Ok(Self {
            config: EngineConfig::new(server, pay_rule_defaults),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
