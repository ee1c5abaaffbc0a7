//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load engine configuration from
//! YAML files: the HTTP server settings and the fallback pay-rule defaults
//! applied to tenants without a stored pay setting.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine").unwrap();
//! println!("Listening on {}", config.config().server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, ServerConfig};
