//! In-memory employee store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Employee, NewEmployee};

use super::EmployeeStore;

#[derive(Debug, Default)]
struct Records {
    next_id: u64,
    employees: BTreeMap<u64, Employee>,
}

/// Keeps employee records in a map for the life of the process.
///
/// Identifiers start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<Records>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with existing records.
    ///
    /// The next identifier continues after the largest one given.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let employees: BTreeMap<u64, Employee> =
            employees.into_iter().map(|e| (e.id, e)).collect();
        let next_id = employees.keys().next_back().copied().unwrap_or(0);
        Self {
            records: RwLock::new(Records { next_id, employees }),
        }
    }

    /// Validates a draft and assigns it the next identifier without making it
    /// visible to readers. The identifier stays consumed even if the record is
    /// never published.
    pub(super) fn reserve_record(&self, new: NewEmployee) -> EngineResult<Employee> {
        new.validate()?;

        let mut records = self.records.write();
        records.next_id += 1;
        Ok(Employee::from_new(records.next_id, new))
    }

    /// Makes a reserved record visible to `get_by_id` and `list_all`.
    pub(super) fn publish_record(&self, employee: Employee) {
        debug!(employee_id = employee.id, "Stored employee record");
        self.records.write().employees.insert(employee.id, employee);
    }

    pub(super) fn snapshot(&self) -> (u64, Vec<Employee>) {
        let records = self.records.read();
        (
            records.next_id,
            records.employees.values().cloned().collect(),
        )
    }

    pub(super) fn from_snapshot(next_id: u64, employees: Vec<Employee>) -> Self {
        let store = Self::with_employees(employees);
        {
            let mut records = store.records.write();
            records.next_id = records.next_id.max(next_id);
        }
        store
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn get_by_id(&self, id: u64) -> EngineResult<Option<Employee>> {
        Ok(self.records.read().employees.get(&id).cloned())
    }

    async fn insert(&self, employee: NewEmployee) -> EngineResult<Employee> {
        let employee = self.reserve_record(employee)?;
        self.publish_record(employee.clone());
        Ok(employee)
    }

    async fn list_all(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.records.read().employees.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn new_employee(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            date_of_birth: None,
            address: None,
            join_date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            basic_salary: Decimal::new(20000, 0),
            dearness_allowance: Decimal::new(6000, 0),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryEmployeeStore::new();

        let first = store.insert(new_employee("Asha")).await.unwrap();
        let second = store.insert(new_employee("Ravi")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_stored_record() {
        let store = InMemoryEmployeeStore::new();
        let stored = store.insert(new_employee("Asha")).await.unwrap();

        let found = store.get_by_id(stored.id).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let store = InMemoryEmployeeStore::new();
        assert_eq!(store.get_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_id() {
        let store = InMemoryEmployeeStore::new();
        for name in ["C", "A", "B"] {
            store.insert(new_employee(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_invalid_record_is_not_stored() {
        let store = InMemoryEmployeeStore::new();
        let result = store.insert(new_employee("  ")).await;

        assert!(matches!(result, Err(EngineError::InvalidEmployee { .. })));
        assert!(store.list_all().await.unwrap().is_empty());

        let next = store.insert(new_employee("Asha")).await.unwrap();
        assert_eq!(next.id, 1);
    }

    #[tokio::test]
    async fn test_reserved_record_is_hidden_until_published() {
        let store = InMemoryEmployeeStore::new();
        let reserved = store.reserve_record(new_employee("Asha")).unwrap();

        assert_eq!(reserved.id, 1);
        assert_eq!(store.get_by_id(1).await.unwrap(), None);
        assert!(store.list_all().await.unwrap().is_empty());

        store.publish_record(reserved.clone());
        assert_eq!(store.get_by_id(1).await.unwrap(), Some(reserved));
    }

    #[tokio::test]
    async fn test_with_employees_continues_numbering() {
        let seeded = Employee::from_new(7, new_employee("Seeded"));
        let store = InMemoryEmployeeStore::with_employees(vec![seeded]);

        let next = store.insert(new_employee("Next")).await.unwrap();
        assert_eq!(next.id, 8);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_unique_ids() {
        let store = Arc::new(InMemoryEmployeeStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.insert(new_employee(&format!("E{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    }
}
