#![allow(dead_code)]

use employee_directory::domain::entities::Employee;
use employee_directory::infrastructure::cache::NullCache;
use employee_directory::infrastructure::persistence::DEFAULT_CACHE_TTL;
use employee_directory::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

pub fn create_test_employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        department_id: "D1".to_string(),
        name: Some("Ann".to_string()),
        age: 30,
        position: Some("Eng".to_string()),
        department_name: None,
        tenure: 2,
    }
}

/// Request body in the HTTP (camelCase) shape.
pub fn employee_body(id: &str) -> Value {
    json!({
        "id": id,
        "departmentId": "D1",
        "name": "Ann",
        "age": 30,
        "position": "Eng",
        "tenure": 2
    })
}

/// Writes a document directly, bypassing the repository and cache.
pub async fn insert_employee(pool: &PgPool, employee: &Employee) {
    sqlx::query("INSERT INTO employees (id, document) VALUES ($1, $2)")
        .bind(&employee.id)
        .bind(Json(employee))
        .execute(pool)
        .await
        .unwrap();
}

/// Reads the raw stored document for `id`.
pub async fn stored_document(pool: &PgPool, id: &str) -> Option<Value> {
    sqlx::query_scalar::<_, Value>("SELECT document FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn count_employees(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), Arc::new(NullCache), DEFAULT_CACHE_TTL)
}
