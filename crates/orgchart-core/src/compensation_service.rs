//! Compensation service: create and read compensation records, checking
//! the referenced employee against the Employee Store.

use orgchart_db::{CompensationStore, EmployeeStore};
use orgchart_types::{Compensation, EmployeeId};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ServiceError;

/// Compensation operations bound to a store that holds both employees and
/// compensations.
pub struct CompensationService<'a, S> {
    store: &'a S,
}

impl<'a, S: EmployeeStore + CompensationStore> CompensationService<'a, S> {
    /// Create a new service bound to a store.
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Persist a compensation record for an existing employee.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::EmployeeNotFound`] if the employee does not
    /// exist, checked first, then [`ServiceError::InvalidSalary`] for a
    /// negative salary. Nothing is persisted on error.
    pub async fn create(&self, compensation: Compensation) -> Result<Compensation, ServiceError> {
        debug!(
            employee_id = %compensation.employee,
            effective_date = %compensation.effective_date,
            "Creating compensation"
        );

        self.require_employee(&compensation.employee).await?;
        if compensation.salary < Decimal::ZERO {
            return Err(ServiceError::InvalidSalary(compensation.salary));
        }

        self.store.insert_compensation(&compensation).await?;
        Ok(compensation)
    }

    /// Read the current compensation for an employee.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::EmployeeNotFound`] for an unknown employee
    /// and [`ServiceError::NoCompensationRecord`] for a known employee with
    /// nothing on file.
    pub async fn read(&self, employee_id: &EmployeeId) -> Result<Compensation, ServiceError> {
        debug!(employee_id = %employee_id, "Reading compensation");

        self.require_employee(employee_id).await?;

        self.store
            .find_compensation(employee_id)
            .await?
            .ok_or_else(|| ServiceError::NoCompensationRecord(employee_id.clone()))
    }

    async fn require_employee(&self, employee_id: &EmployeeId) -> Result<(), ServiceError> {
        match self.store.find_employee(employee_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::EmployeeNotFound(employee_id.clone())),
        }
    }
}
