//! Operations on the `employees` table.
//!
//! Scalar fields map to nullable `TEXT` columns. The direct-report list is
//! stored as `JSONB` in its wire form, so shallow references and nested
//! full snapshots come back exactly as they were submitted.

use orgchart_types::{DirectReport, Employee, EmployeeId};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `employees` table.
pub struct EmployeeTable<'a> {
    pool: &'a PgPool,
}

impl<'a> EmployeeTable<'a> {
    /// Create a new table handle bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::Serialization`] if the stored direct reports are corrupt.
    pub async fn find(&self, id: &EmployeeId) -> Result<Option<Employee>, DbError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r"SELECT employee_id, first_name, last_name, position, department, direct_reports
              FROM employees
              WHERE employee_id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(Employee::try_from).transpose()
    }

    /// Insert a new employee row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::DuplicateEmployee`] on a primary-key collision,
    /// or [`DbError::Postgres`] if the insert fails otherwise.
    pub async fn insert(&self, employee: &Employee) -> Result<(), DbError> {
        let direct_reports = encode_reports(employee.direct_reports.as_deref())?;

        let result = sqlx::query(
            r"INSERT INTO employees (employee_id, first_name, last_name, position, department, direct_reports)
              VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(employee.employee_id.as_str())
        .bind(employee.first_name.as_deref())
        .bind(employee.last_name.as_deref())
        .bind(employee.position.as_deref())
        .bind(employee.department.as_deref())
        .bind(direct_reports)
        .execute(self.pool)
        .await;

        match result {
            Ok(_) => {
                tracing::debug!(employee_id = %employee.employee_id, "Inserted employee");
                Ok(())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                DbError::DuplicateEmployee(employee.employee_id.to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace every column of an existing employee row.
    ///
    /// Returns `false` when no row matched the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn replace(&self, employee: &Employee) -> Result<bool, DbError> {
        let direct_reports = encode_reports(employee.direct_reports.as_deref())?;

        let result = sqlx::query(
            r"UPDATE employees
              SET first_name = $2, last_name = $3, position = $4, department = $5,
                  direct_reports = $6, updated_at = now()
              WHERE employee_id = $1",
        )
        .bind(employee.employee_id.as_str())
        .bind(employee.first_name.as_deref())
        .bind(employee.last_name.as_deref())
        .bind(employee.position.as_deref())
        .bind(employee.department.as_deref())
        .bind(direct_reports)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// A row from the `employees` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeRow {
    /// Employee identifier.
    pub employee_id: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Department.
    pub department: Option<String>,
    /// Direct reports in wire form.
    pub direct_reports: Option<serde_json::Value>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = DbError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let direct_reports = row
            .direct_reports
            .map(serde_json::from_value::<Vec<DirectReport>>)
            .transpose()?;

        Ok(Self {
            employee_id: EmployeeId::from(row.employee_id),
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position,
            department: row.department,
            direct_reports,
        })
    }
}

fn encode_reports(reports: Option<&[DirectReport]>) -> Result<Option<serde_json::Value>, DbError> {
    Ok(reports.map(serde_json::to_value).transpose()?)
}
