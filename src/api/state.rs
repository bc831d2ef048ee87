//! Application state for the gratuity API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::store::EmployeeStore;

type Clock = dyn Fn() -> NaiveDate + Send + Sync;

/// Shared application state.
///
/// Holds the employee store and the clock used to default a missing exit date.
/// The clock is only consulted at the HTTP boundary.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EmployeeStore>,
    today: Arc<Clock>,
}

impl AppState {
    /// Creates state whose default exit date is the local calendar date.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            store,
            today: Arc::new(|| Local::now().date_naive()),
        }
    }

    /// Creates state whose default exit date is always `date`.
    pub fn with_fixed_date(store: Arc<dyn EmployeeStore>, date: NaiveDate) -> Self {
        Self {
            store,
            today: Arc::new(move || date),
        }
    }

    /// Returns the employee store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// Returns the date used when a request names no exit date.
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }
}
