//! Store interfaces consumed by the services and the reporting engine.
//!
//! Both traits use `async fn`-style methods returning `Send` futures, so
//! they are used through generics rather than trait objects. Switching
//! between backends at runtime goes through the [`Storage`] enum.
//!
//! Every operation is atomic at single-record granularity. Nothing here
//! spans several records in one transaction.
//!
//! [`Storage`]: crate::storage::Storage

use std::future::Future;

use orgchart_types::{Compensation, Employee, EmployeeId};

use crate::error::DbError;

/// Key-value persistence of employee records.
pub trait EmployeeStore: Send + Sync {
    /// Point lookup by identifier. `Ok(None)` when the id is unknown.
    fn find_employee(
        &self,
        id: &EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, DbError>> + Send;

    /// Persist a new record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::DuplicateEmployee`] if the identifier is taken.
    fn insert_employee(&self, employee: &Employee)
    -> impl Future<Output = Result<(), DbError>> + Send;

    /// Replace an existing record in full.
    ///
    /// Returns `Ok(false)` without writing anything when no record with
    /// the employee's identifier exists.
    fn update_employee(
        &self,
        employee: &Employee,
    ) -> impl Future<Output = Result<bool, DbError>> + Send;
}

/// Persistence of compensation records keyed by employee identifier.
pub trait CompensationStore: Send + Sync {
    /// Append a compensation record. Several records per employee are
    /// allowed.
    fn insert_compensation(
        &self,
        compensation: &Compensation,
    ) -> impl Future<Output = Result<(), DbError>> + Send;

    /// The current compensation for an employee: the record with the
    /// latest effective date, most recently inserted on ties.
    fn find_compensation(
        &self,
        employee_id: &EmployeeId,
    ) -> impl Future<Output = Result<Option<Compensation>, DbError>> + Send;
}
