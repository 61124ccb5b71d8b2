//! Handlers for the `/Employees` resource.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
};
use serde_json::json;
use url::Url;
use validator::Validate;

use crate::api::dto::employee::EmployeeDto;
use crate::domain::entities::Employee;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a single employee.
///
/// # Endpoint
///
/// `GET /Employees/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no employee has this id.
pub async fn get_employee_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EmployeeDto>, AppError> {
    let employee = state
        .employee_service
        .get_employee(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found", json!({ "id": id })))?;

    Ok(Json(employee.into()))
}

/// Returns every employee; an empty store yields `[]`.
///
/// # Endpoint
///
/// `GET /Employees`
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeDto>>, AppError> {
    let employees = state.employee_service.get_all_employees().await?;

    Ok(Json(employees.into_iter().map(EmployeeDto::from).collect()))
}

/// Creates an employee.
///
/// # Endpoint
///
/// `POST /Employees`
///
/// # Response
///
/// 201 Created with `Location: /Employees/{id}` and the created employee as body.
///
/// # Errors
///
/// Returns 400 Bad Request if the id is empty.
/// Returns 500 if the id already exists.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeDto>,
) -> Result<(StatusCode, [(header::HeaderName, HeaderValue); 1], Json<EmployeeDto>), AppError> {
    payload.validate()?;

    let location = employee_location(&payload.id)?;
    let employee = Employee::from(payload.clone());
    state.employee_service.create_employee(&employee).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(payload),
    ))
}

/// Replaces an employee.
///
/// # Endpoint
///
/// `PUT /Employees/{id}`
///
/// The whole record is replaced; missing optional fields become `null`. An
/// unknown id is created.
///
/// # Errors
///
/// Returns 400 Bad Request if the path id differs from the body id. Nothing is
/// written in that case.
pub async fn update_employee_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<EmployeeDto>,
) -> Result<StatusCode, AppError> {
    if id != payload.id {
        return Err(AppError::bad_request(
            "Path id does not match body id",
            json!({ "path_id": id, "body_id": payload.id }),
        ));
    }
    payload.validate()?;

    state
        .employee_service
        .update_employee(&Employee::from(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an employee. Deleting an unknown id still answers 204.
///
/// # Endpoint
///
/// `DELETE /Employees/{id}`
pub async fn delete_employee_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.employee_service.delete_employee(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Builds the relative `Location` of an employee, percent-encoding the id.
fn employee_location(id: &str) -> Result<HeaderValue, AppError> {
    let invalid = || AppError::internal("Failed to build resource location", json!({ "id": id }));

    let mut url = Url::parse("http://localhost/").map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .clear()
        .push("Employees")
        .push(id);

    HeaderValue::from_str(url.path()).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_location_plain_id() {
        assert_eq!(employee_location("42").unwrap(), "/Employees/42");
    }

    #[test]
    fn test_employee_location_encodes_reserved_characters() {
        let location = employee_location("a/b c").unwrap();

        assert_eq!(location, "/Employees/a%2Fb%20c");
    }
}
