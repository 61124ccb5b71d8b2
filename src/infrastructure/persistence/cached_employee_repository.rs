//! Cache-aside employee repository.
//!
//! Wraps an [`EmployeeStore`] with a [`CacheService`]:
//! - **Reads**: check cache first, on miss read the store and populate the cache
//! - **Writes**: persist to the store, then refresh or invalidate cached keys
//!
//! Two kinds of keys are used: [`employee_key`] for single records and
//! [`ALL_EMPLOYEES_KEY`] for the full listing. Cache writes happen after the
//! store write completes, so a concurrent reader can still repopulate the
//! listing with pre-write data until the TTL expires.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::entities::Employee;
use crate::domain::repositories::{EmployeeRepository, EmployeeStore};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Cache key holding the serialized list of every employee.
pub const ALL_EMPLOYEES_KEY: &str = "all_employees";

/// Namespace of per-employee keys, keeping any id apart from [`ALL_EMPLOYEES_KEY`].
const EMPLOYEE_KEY_PREFIX: &str = "employee:";

/// Cache key of a single employee record.
pub fn employee_key(id: &str) -> String {
    format!("{EMPLOYEE_KEY_PREFIX}{id}")
}

/// Default lifetime of cached entries.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Employee repository that consults a cache before the document store.
pub struct CachedEmployeeRepository<S: EmployeeStore> {
    store: Arc<S>,
    cache: Arc<dyn CacheService>,
    ttl: Duration,
}

impl<S: EmployeeStore> CachedEmployeeRepository<S> {
    /// Creates a new repository.
    ///
    /// # Arguments
    ///
    /// * `store` - The document store holding employee records
    /// * `cache` - The cache consulted before the store
    /// * `ttl` - Lifetime of every entry this repository writes
    pub fn new(store: Arc<S>, cache: Arc<dyn CacheService>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// Reads and decodes a cached value. Empty strings count as a miss.
    async fn read_cached<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.cache.get(key).await? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    async fn write_cached<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        self.cache.set(key, &raw, self.ttl).await?;
        Ok(())
    }
}

#[async_trait]
impl<S: EmployeeStore + 'static> EmployeeRepository for CachedEmployeeRepository<S> {
    async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let key = employee_key(id);
        if let Some(employee) = self.read_cached::<Employee>(&key).await? {
            debug!(employee_id = id, "Employee served from cache");
            return Ok(Some(employee));
        }

        let employee = self.store.find_by_id(id).await?;

        if let Some(ref found) = employee {
            self.write_cached(&key, found).await?;
        }

        Ok(employee)
    }

    async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        if let Some(employees) = self.read_cached::<Vec<Employee>>(ALL_EMPLOYEES_KEY).await? {
            debug!(count = employees.len(), "Employee list served from cache");
            return Ok(employees);
        }

        let employees = self.store.scan().await?;

        if !employees.is_empty() {
            self.write_cached(ALL_EMPLOYEES_KEY, &employees).await?;
        }

        Ok(employees)
    }

    async fn create(&self, employee: &Employee) -> Result<(), AppError> {
        self.store.insert(employee).await?;
        self.cache.invalidate(ALL_EMPLOYEES_KEY).await?;

        debug!(employee_id = %employee.id, "Employee created");
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<(), AppError> {
        self.store.upsert(employee).await?;
        self.write_cached(&employee_key(&employee.id), employee).await?;
        self.cache.invalidate(ALL_EMPLOYEES_KEY).await?;

        debug!(employee_id = %employee.id, "Employee updated");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self.store.delete(id).await?;
        self.cache.invalidate(&employee_key(id)).await?;
        self.cache.invalidate(ALL_EMPLOYEES_KEY).await?;

        if removed {
            debug!(employee_id = id, "Employee deleted");
        } else {
            debug!(employee_id = id, "Delete requested for unknown employee");
        }
        Ok(())
    }
}
