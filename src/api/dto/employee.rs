//! DTO for employee request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Employee;

/// JSON shape of an employee on the HTTP surface.
///
/// `id` and `departmentId` are required; `age` and `tenure` default to 0.
/// PascalCase property names are accepted on input as well.
///
/// ```json
/// {
///   "id": "1",
///   "departmentId": "D1",
///   "name": "Ann",
///   "age": 30,
///   "position": "Eng",
///   "departmentName": "Engineering",
///   "tenure": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(alias = "Id")]
    #[validate(length(min = 1, message = "Employee id must not be empty"))]
    pub id: String,
    #[serde(alias = "DepartmentId")]
    pub department_id: String,
    #[serde(alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Age")]
    pub age: i32,
    #[serde(alias = "Position")]
    pub position: Option<String>,
    #[serde(alias = "DepartmentName")]
    pub department_name: Option<String>,
    #[serde(default, alias = "Tenure")]
    pub tenure: i32,
}

impl From<EmployeeDto> for Employee {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            id: dto.id,
            department_id: dto.department_id,
            name: dto.name,
            age: dto.age,
            position: dto.position,
            department_name: dto.department_name,
            tenure: dto.tenure,
        }
    }
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            department_id: employee.department_id,
            name: employee.name,
            age: employee.age,
            position: employee.position,
            department_name: employee.department_name,
            tenure: employee.tenure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dto_uses_camel_case() {
        let dto: EmployeeDto = serde_json::from_value(json!({
            "id": "1",
            "departmentId": "D1",
            "name": "Ann",
            "age": 30,
            "position": "Eng",
            "tenure": 2
        }))
        .unwrap();

        assert_eq!(dto.department_id, "D1");
        assert!(dto.department_name.is_none());

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["departmentId"], "D1");
        assert!(value["departmentName"].is_null());
    }

    #[test]
    fn test_dto_defaults_numeric_fields() {
        let dto: EmployeeDto =
            serde_json::from_value(json!({ "id": "2", "departmentId": "D2" })).unwrap();

        assert_eq!(dto.age, 0);
        assert_eq!(dto.tenure, 0);
    }

    #[test]
    fn test_dto_requires_department_id() {
        let result = serde_json::from_value::<EmployeeDto>(json!({ "id": "3" }));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_id_fails_validation() {
        let dto: EmployeeDto =
            serde_json::from_value(json!({ "id": "", "departmentId": "D1" })).unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_dto_accepts_pascal_case_input() {
        let dto: EmployeeDto = serde_json::from_value(json!({
            "Id": "4",
            "DepartmentId": "D4",
            "Name": "Dee",
            "Age": 41,
            "Position": "Lead",
            "DepartmentName": "Ops",
            "Tenure": 7
        }))
        .unwrap();

        assert_eq!(dto.id, "4");
        assert_eq!(dto.department_id, "D4");
        assert_eq!(dto.department_name.as_deref(), Some("Ops"));
        assert_eq!(dto.tenure, 7);

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["departmentId"], "D4");
    }
}
