//! Configuration loading and management for the gratuity service.
//!
//! This module loads the listener, storage and logging settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use gratuity_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/gratuity.yaml").unwrap();
//! println!("Storage backend: {:?}", config.config().storage.backend);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ServerConfig, StorageBackend, StorageConfig};
