//! JSON-file backed employee store.
//!
//! The whole store is one JSON document, rewritten through a temporary file
//! and a rename after every insert:
//!
//! ```text
//! { "next_id": 2, "employees": [ { "id": 1, "name": "...", ... } ] }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, NewEmployee};

use super::{EmployeeStore, InMemoryEmployeeStore};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    next_id: u64,
    employees: Vec<Employee>,
}

/// Employee store that survives restarts by persisting to a JSON file.
///
/// Reads are served from memory. Writes are serialised, and a record only
/// becomes readable once the file containing it has been renamed into place.
#[derive(Debug)]
pub struct JsonFileEmployeeStore {
    path: PathBuf,
    records: InMemoryEmployeeStore,
    write_lock: Mutex<()>,
}

impl JsonFileEmployeeStore {
    /// Opens the store at `path`, loading existing records if the file exists.
    ///
    /// A missing file is an empty store; the file is created on the first insert.
    pub async fn open(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();

        let document = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                serde_json::from_slice::<StoreDocument>(&bytes).map_err(|e| {
                    EngineError::Storage {
                        message: format!("corrupt store file '{}': {}", path.display(), e),
                    }
                })?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreDocument::default(),
            Err(err) => {
                return Err(EngineError::Storage {
                    message: format!("failed to read '{}': {}", path.display(), err),
                });
            }
        };

        info!(
            path = %path.display(),
            employees = document.employees.len(),
            "Opened employee store"
        );

        Ok(Self {
            records: InMemoryEmployeeStore::from_snapshot(document.next_id, document.employees),
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, document: &StoreDocument) -> EngineResult<()> {

        let storage_error = |action: &str, err: &dyn std::fmt::Display| EngineError::Storage {
            message: format!("failed to {} '{}': {}", action, self.path.display(), err),
        };

        let bytes =
            serde_json::to_vec_pretty(document).map_err(|e| storage_error("serialize", &e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create directory for", &e))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| storage_error("write", &e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| storage_error("replace", &e))?;

        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for JsonFileEmployeeStore {
    async fn get_by_id(&self, id: u64) -> EngineResult<Option<Employee>> {
        self.records.get_by_id(id).await
    }

    async fn insert(&self, employee: NewEmployee) -> EngineResult<Employee> {
        let _guard = self.write_lock.lock().await;

        let staged = self.records.reserve_record(employee)?;
        let (next_id, mut employees) = self.records.snapshot();
        employees.push(staged.clone());

        if let Err(err) = self.persist(&StoreDocument { next_id, employees }).await {
            warn!(employee_id = staged.id, error = %err, "Discarding unsaved employee");
            return Err(err);
        }

        self.records.publish_record(staged.clone());
        Ok(staged)
    }

    async fn list_all(&self) -> EngineResult<Vec<Employee>> {
        self.records.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn new_employee(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1988, 11, 2),
            address: Some("4 Park Street, Kolkata".to_string()),
            join_date: NaiveDate::from_ymd_opt(2014, 8, 1).unwrap(),
            basic_salary: Decimal::new(3250050, 2),
            dearness_allowance: Decimal::new(4000, 0),
        }
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");

        let stored = {
            let store = JsonFileEmployeeStore::open(&path).await.unwrap();
            store.insert(new_employee("Asha")).await.unwrap()
        };

        let reopened = JsonFileEmployeeStore::open(&path).await.unwrap();
        assert_eq!(reopened.get_by_id(stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_numbering_continues_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");

        {
            let store = JsonFileEmployeeStore::open(&path).await.unwrap();
            store.insert(new_employee("Asha")).await.unwrap();
            store.insert(new_employee("Ravi")).await.unwrap();
        }

        let reopened = JsonFileEmployeeStore::open(&path).await.unwrap();
        let third = reopened.insert(new_employee("Meera")).await.unwrap();
        assert_eq!(third.id, 3);
        assert_eq!(reopened.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("employees.json");

        let store = JsonFileEmployeeStore::open(&path).await.unwrap();
        store.insert(new_employee("Asha")).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");

        let store = JsonFileEmployeeStore::open(&path).await.unwrap();
        store.insert(new_employee("Asha")).await.unwrap();

        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(json["next_id"], 1);
        assert_eq!(json["employees"][0]["name"], "Asha");
        assert_eq!(json["employees"][0]["basic_salary"], "32500.50");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");
        std::fs::write(&path, b"not json").unwrap();

        match JsonFileEmployeeStore::open(&path).await {
            Err(EngineError::Storage { message }) => assert!(message.contains("corrupt")),
            other => panic!("Expected Storage error, got {:?}", other.map(|s| s.path().to_path_buf())),
        }
    }

    #[tokio::test]
    async fn test_failed_write_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        // The store path is an existing directory, so the rename cannot succeed.
        let path = dir.path().join("occupied");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"x").unwrap();

        let store = JsonFileEmployeeStore {
            path: path.clone(),
            records: InMemoryEmployeeStore::new(),
            write_lock: Mutex::new(()),
        };

        let result = store.insert(new_employee("Asha")).await;
        assert!(matches!(result, Err(EngineError::Storage { .. })));
        assert!(store.list_all().await.unwrap().is_empty());
        assert_eq!(store.get_by_id(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_record_is_readable_only_after_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("occupied");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"x").unwrap();

        let store = JsonFileEmployeeStore {
            path: path.clone(),
            records: InMemoryEmployeeStore::new(),
            write_lock: Mutex::new(()),
        };
        assert!(store.insert(new_employee("Asha")).await.is_err());

        // Free the path; the next insert succeeds with a fresh identifier.
        std::fs::remove_dir_all(&path).unwrap();
        let stored = store.insert(new_employee("Ravi")).await.unwrap();
        assert_eq!(stored.id, 2);

        let on_disk: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk["next_id"], 2);
        assert_eq!(on_disk["employees"].as_array().unwrap().len(), 1);
        assert_eq!(store.list_all().await.unwrap(), vec![stored]);
    }

    #[tokio::test]
    async fn test_invalid_record_does_not_touch_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");

        let store = JsonFileEmployeeStore::open(&path).await.unwrap();
        let mut invalid = new_employee("Asha");
        invalid.basic_salary = Decimal::new(-1, 0);

        assert!(matches!(
            store.insert(invalid).await,
            Err(EngineError::NegativeMoney { .. })
        ));
        assert!(!path.exists());
    }
}
