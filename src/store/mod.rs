//! Employee persistence.
//!
//! The [`EmployeeStore`] trait is the only way the rest of the service reaches
//! stored records. The calculator never depends on it; handlers read a record
//! and pass its plain values to the calculation functions.

mod json_file;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, NewEmployee};

pub use json_file::JsonFileEmployeeStore;
pub use memory::InMemoryEmployeeStore;

/// Storage for employee records.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Finds an employee by identifier.
    async fn get_by_id(&self, id: u64) -> EngineResult<Option<Employee>>;

    /// Validates and stores a new employee, returning it with its assigned identifier.
    async fn insert(&self, employee: NewEmployee) -> EngineResult<Employee>;

    /// Returns every stored employee ordered by identifier.
    async fn list_all(&self) -> EngineResult<Vec<Employee>>;
}

/// Opens the store selected by the configuration.
pub async fn open_store(config: &StorageConfig) -> EngineResult<Arc<dyn EmployeeStore>> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryEmployeeStore::new())),
        StorageBackend::JsonFile => {
            let path = config.path.as_ref().ok_or_else(|| EngineError::Storage {
                message: "json_file backend selected without a path".to_string(),
            })?;
            Ok(Arc::new(JsonFileEmployeeStore::open(path).await?))
        }
    }
}
