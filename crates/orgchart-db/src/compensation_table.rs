//! Operations on the `compensations` table.

use chrono::NaiveDate;
use orgchart_types::{Compensation, EmployeeId};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `compensations` table.
pub struct CompensationTable<'a> {
    pool: &'a PgPool,
}

impl<'a> CompensationTable<'a> {
    /// Create a new table handle bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append a compensation row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, compensation: &Compensation) -> Result<(), DbError> {
        sqlx::query(
            r"INSERT INTO compensations (employee_id, salary, effective_date)
              VALUES ($1, $2, $3)",
        )
        .bind(compensation.employee.as_str())
        .bind(compensation.salary)
        .bind(compensation.effective_date)
        .execute(self.pool)
        .await?;

        tracing::debug!(employee_id = %compensation.employee, "Inserted compensation");
        Ok(())
    }

    /// Fetch the current compensation for an employee: latest effective
    /// date first, then latest insert.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_current(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Compensation>, DbError> {
        let row = sqlx::query_as::<_, CompensationRow>(
            r"SELECT employee_id, salary, effective_date
              FROM compensations
              WHERE employee_id = $1
              ORDER BY effective_date DESC, id DESC
              LIMIT 1",
        )
        .bind(employee_id.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Compensation::from))
    }
}

/// A row from the `compensations` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompensationRow {
    /// Employee identifier.
    pub employee_id: String,
    /// Salary amount.
    pub salary: Decimal,
    /// Effective date.
    pub effective_date: NaiveDate,
}

impl From<CompensationRow> for Compensation {
    fn from(row: CompensationRow) -> Self {
        Self {
            employee: EmployeeId::from(row.employee_id),
            salary: row.salary,
            effective_date: row.effective_date,
        }
    }
}
