//! Error types for the service layer.
//!
//! [`ServiceError`] is what the employee and compensation services return.
//! Each variant is a distinct kind the boundary layer maps to its own
//! presentation; engine errors convert without losing their kind.

use orgchart_db::DbError;
use orgchart_types::EmployeeId;
use rust_decimal::Decimal;

use crate::reporting::ReportingError;

/// Errors surfaced by the employee and compensation services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The identifier does not resolve in the Employee Store.
    #[error("employee {0} does not exist")]
    EmployeeNotFound(EmployeeId),

    /// The stored reporting graph revisits an employee.
    #[error("cycle in reporting structure detected at employee {0}")]
    CycleDetected(EmployeeId),

    /// The employee exists but has no compensation on file.
    #[error("no compensation found for employee {0}")]
    NoCompensationRecord(EmployeeId),

    /// A compensation was submitted with a negative salary.
    #[error("salary must be non-negative, got {0}")]
    InvalidSalary(Decimal),

    /// The underlying store failed.
    #[error("store error: {0}")]
    Store(#[from] DbError),
}

impl From<ReportingError> for ServiceError {
    fn from(err: ReportingError) -> Self {
        match err {
            ReportingError::CycleDetected(id) => Self::CycleDetected(id),
            ReportingError::EmployeeNotFound(id) => Self::EmployeeNotFound(id),
            ReportingError::Store(e) => Self::Store(e),
        }
    }
}
