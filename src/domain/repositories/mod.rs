//! Repository trait definitions for the domain layer.
//!
//! Two contracts are defined here:
//!
//! - [`EmployeeStore`] - the document store itself, one call per round-trip
//! - [`EmployeeRepository`] - the operations the service layer consumes
//!
//! Concrete implementations live in `crate::infrastructure::persistence`.
//! Mock implementations are auto-generated via `mockall` for testing.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_employee.rs` for usage examples.

pub mod employee_repository;
pub mod employee_store;

pub use employee_repository::EmployeeRepository;
pub use employee_store::EmployeeStore;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use employee_store::MockEmployeeStore;
