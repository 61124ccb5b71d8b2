//! Document store contract for employee records.

use crate::domain::entities::Employee;
use crate::error::AppError;
use async_trait::async_trait;

/// Raw access to the employee document store.
///
/// Records are partitioned by their `id`. Implementations perform exactly one
/// round-trip per call and know nothing about caching.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEmployeeStore`] - PostgreSQL JSONB documents
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Reads a single document by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Employee))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;

    /// Inserts a new document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a document with the same id already
    /// exists or on any other database error.
    async fn insert(&self, employee: &Employee) -> Result<(), AppError>;

    /// Creates or replaces the document with the employee's id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, employee: &Employee) -> Result<(), AppError>;

    /// Deletes a document by id.
    ///
    /// Returns `Ok(true)` if a document was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Reads every document in the store, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn scan(&self) -> Result<Vec<Employee>, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
