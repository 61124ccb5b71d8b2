//! Persistence implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgEmployeeStore`] - PostgreSQL JSONB document store
//! - [`CachedEmployeeRepository`] - cache-aside repository over any [`crate::domain::repositories::EmployeeStore`]

pub mod cached_employee_repository;
pub mod pg_employee_store;

pub use cached_employee_repository::{
    ALL_EMPLOYEES_KEY, CachedEmployeeRepository, DEFAULT_CACHE_TTL, employee_key,
};
pub use pg_employee_store::PgEmployeeStore;
