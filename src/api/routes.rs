//! API route configuration.

use crate::api::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    list_employees_handler, update_employee_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Employee CRUD routes.
///
/// # Endpoints
///
/// - `GET    /Employees`        - List every employee
/// - `POST   /Employees`        - Create an employee
/// - `GET    /Employees/{id}`   - Fetch one employee
/// - `PUT    /Employees/{id}`   - Replace an employee
/// - `DELETE /Employees/{id}`   - Delete an employee
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/Employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/Employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
}
