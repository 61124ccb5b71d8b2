//! Repository trait for employee data access.

use crate::domain::entities::Employee;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing employees.
///
/// The five operations exposed over HTTP. Implementations decide whether a
/// cache sits in front of the document store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::CachedEmployeeRepository`] - cache-aside over an [`super::EmployeeStore`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Finds an employee by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Employee))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store or cache errors.
    async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;

    /// Returns every stored employee. An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store or cache errors.
    async fn get_all(&self) -> Result<Vec<Employee>, AppError>;

    /// Inserts a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the id is already taken or on store
    /// or cache errors.
    async fn create(&self, employee: &Employee) -> Result<(), AppError>;

    /// Replaces the employee with the same id, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store or cache errors.
    async fn update(&self, employee: &Employee) -> Result<(), AppError>;

    /// Removes an employee. Removing an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store or cache errors.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
