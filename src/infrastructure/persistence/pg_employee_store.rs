//! PostgreSQL implementation of the employee document store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeStore;
use crate::error::AppError;

/// Employee documents kept as JSONB rows in the `employees` table.
///
/// The `id` column doubles as the partition key; the `document` column holds
/// the record in its persisted casing (see [`Employee`]).
pub struct PgEmployeeStore {
    pool: Arc<PgPool>,
}

impl PgEmployeeStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let document = sqlx::query_scalar::<_, Json<Employee>>(
            "SELECT document FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(document.map(|Json(employee)| employee))
    }

    async fn insert(&self, employee: &Employee) -> Result<(), AppError> {
        sqlx::query("INSERT INTO employees (id, document) VALUES ($1, $2)")
            .bind(&employee.id)
            .bind(Json(employee))
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn upsert(&self, employee: &Employee) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, document)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE
            SET document = EXCLUDED.document, updated_at = NOW()
            "#,
        )
        .bind(&employee.id)
        .bind(Json(employee))
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn scan(&self) -> Result<Vec<Employee>, AppError> {
        let documents = sqlx::query_scalar::<_, Json<Employee>>(
            "SELECT document FROM employees ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(documents.into_iter().map(|Json(employee)| employee).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
