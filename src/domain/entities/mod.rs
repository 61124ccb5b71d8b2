//! Core domain entities.
//!
//! - [`Employee`] - the only entity; keyed and partitioned by its `id`

pub mod employee;

pub use employee::Employee;
