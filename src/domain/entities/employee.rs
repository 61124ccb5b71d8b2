//! Employee entity and its persisted document shape.

use serde::{Deserialize, Serialize};

/// An employee record as stored in the document store and in the cache.
///
/// The serialized field names (`id`, `DepartmentId`, `Name`, `Age`, `Position`,
/// `DepartmentName`, `Tenure`) match documents written by earlier deployments
/// and must not change. The HTTP representation lives in
/// [`crate::api::dto::employee::EmployeeDto`] and uses camelCase instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    /// Primary key and partition key. Supplied by the caller.
    #[serde(rename = "id")]
    pub id: String,
    #[serde(default)]
    pub department_id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub age: i32,
    pub position: Option<String>,
    /// Denormalized copy; not kept in sync with any department source.
    pub department_name: Option<String>,
    /// Years with the organization.
    #[serde(default)]
    pub tenure: i32,
}

impl Employee {
    /// Creates an employee with only the required fields set.
    pub fn new(id: impl Into<String>, department_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            department_id: department_id.into(),
            name: None,
            age: 0,
            position: None,
            department_name: None,
            tenure: 0,
        }
    }
}
