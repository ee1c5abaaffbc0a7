//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::models::PaySetting;
use crate::store::{InMemoryStore, PayrollDetailStore, PayrollFinalizer};

/// Shared application state.
///
/// Contains the two payroll components that are shared across all request
/// handlers: the detail store and the period finalizer.
#[derive(Clone)]
pub struct AppState {
    details: Arc<PayrollDetailStore>,
    finalizer: Arc<PayrollFinalizer>,
}

impl AppState {
    /// Creates a new application state from pre-built components.
    pub fn new(details: Arc<PayrollDetailStore>, finalizer: Arc<PayrollFinalizer>) -> Self {
        Self { details, finalizer }
    }

    /// Creates an application state over one in-memory store, with the
    /// given pay-rule defaults for tenants without a stored setting.
    pub fn in_memory(store: Arc<InMemoryStore>, default_setting: PaySetting) -> Self {
        let details = Arc::new(PayrollDetailStore::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            default_setting,
        ));
        let finalizer = Arc::new(PayrollFinalizer::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        ));
        Self::new(details, finalizer)
    }

    /// Returns the payroll detail store.
    pub fn details(&self) -> &PayrollDetailStore {
        &self.details
    }

    /// Returns the period finalizer.
    pub fn finalizer(&self) -> &PayrollFinalizer {
        &self.finalizer
    }
}
