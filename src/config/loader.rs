//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, StorageBackend};

/// Loads and provides access to the service configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 5001
/// storage:
///   backend: json_file     # or "memory"
///   path: data/employees.json
/// logging:
///   filter: info
/// ```
///
/// # Example
///
/// ```no_run
/// use gratuity_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gratuity.yaml").unwrap();
/// println!("Listening on {}", loader.config().server.socket_addr());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for [`AppConfig`] (`ConfigParseError`)
    /// - The `json_file` backend is selected without a `path` (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        if config.storage.backend == StorageBackend::JsonFile && config.storage.path.is_none() {
            return Err(EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: "storage.path is required for the json_file backend".to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
