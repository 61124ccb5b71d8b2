//! Employee service.

use std::sync::Arc;

use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

/// Service used by HTTP handlers to manage employees.
///
/// Every method delegates to the repository unchanged; the type exists so
/// handlers depend on a service rather than on storage.
pub struct EmployeeService<R: EmployeeRepository> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a new employee service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves an employee by id, `None` if it does not exist.
    pub async fn get_employee(&self, id: &str) -> Result<Option<Employee>, AppError> {
        self.repository.get_by_id(id).await
    }

    /// Retrieves every employee.
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.get_all().await
    }

    /// Creates a new employee record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the id already exists or the store fails.
    pub async fn create_employee(&self, employee: &Employee) -> Result<(), AppError> {
        self.repository.create(employee).await
    }

    /// Replaces an employee record, creating it if absent.
    pub async fn update_employee(&self, employee: &Employee) -> Result<(), AppError> {
        self.repository.update(employee).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockEmployeeRepository;
    use serde_json::json;

    fn create_test_employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            department_id: "D1".to_string(),
            name: Some("Ann".to_string()),
            age: 30,
            position: Some("Eng".to_string()),
            department_name: Some("Engineering".to_string()),
            tenure: 2,
        }
    }

    #[tokio::test]
    async fn test_get_employee_found() {
        let mut mock_repo = MockEmployeeRepository::new();

        let employee = create_test_employee("1");
        mock_repo
            .expect_get_by_id()
            .withf(|id| id == "1")
            .times(1)
            .returning(move |_| Ok(Some(employee.clone())));

        let service = EmployeeService::new(Arc::new(mock_repo));

        let result = service.get_employee("1").await.unwrap();

        assert_eq!(result, Some(create_test_employee("1")));
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(mock_repo));

        assert!(service.get_employee("404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_employees_empty() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo.expect_get_all().times(1).returning(|| Ok(vec![]));

        let service = EmployeeService::new(Arc::new(mock_repo));

        assert!(service.get_all_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_employee_passes_record_through() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_create()
            .withf(|employee| employee.id == "5" && employee.department_id == "D1")
            .times(1)
            .returning(|_| Ok(()));

        let service = EmployeeService::new(Arc::new(mock_repo));

        let result = service.create_employee(&create_test_employee("5")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_employee_propagates_errors() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = EmployeeService::new(Arc::new(mock_repo));

        let result = service.update_employee(&create_test_employee("1")).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_delete_employee() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| id == "1")
            .times(1)
            .returning(|_| Ok(()));

        let service = EmployeeService::new(Arc::new(mock_repo));

        assert!(service.delete_employee("1").await.is_ok());
    }
}
