//! Application layer services.
//!
//! Services consume repository traits and provide the API HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::employee_service::EmployeeService`] - Employee CRUD

pub mod services;
