//! Employee service: create, read, full-replace update, and reporting
//! structure lookup over an [`EmployeeStore`].

use orgchart_db::EmployeeStore;
use orgchart_types::{Employee, EmployeeDraft, EmployeeId, ReportingStructure};
use tracing::debug;

use crate::error::ServiceError;
use crate::reporting::compute_reporting_structure;

/// Employee operations bound to a store.
///
/// Holds only a borrowed store handle. Each reporting-structure request
/// builds its own traversal state inside the engine, so one service value
/// can serve concurrent requests.
pub struct EmployeeService<'a, S> {
    store: &'a S,
}

impl<'a, S: EmployeeStore> EmployeeService<'a, S> {
    /// Create a new service bound to a store.
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Persist a new employee under a freshly generated identifier.
    ///
    /// Direct reports are stored exactly as given, shallow references
    /// included.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the insert fails.
    pub async fn create(&self, draft: EmployeeDraft) -> Result<Employee, ServiceError> {
        let employee = draft.into_employee(EmployeeId::generate());
        debug!(
            employee_id = %employee.employee_id,
            direct_reports = employee.direct_report_count(),
            "Creating employee"
        );

        self.store.insert_employee(&employee).await?;
        Ok(employee)
    }

    /// Read an employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::EmployeeNotFound`] for an unknown identifier.
    pub async fn read(&self, id: &EmployeeId) -> Result<Employee, ServiceError> {
        debug!(employee_id = %id, "Reading employee");

        self.store
            .find_employee(id)
            .await?
            .ok_or_else(|| ServiceError::EmployeeNotFound(id.clone()))
    }

    /// Replace an existing employee record in full.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::EmployeeNotFound`] if no record with `id`
    /// exists; nothing is written in that case.
    pub async fn update(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Employee, ServiceError> {
        let employee = draft.into_employee(id);
        debug!(employee_id = %employee.employee_id, "Updating employee");

        if self.store.update_employee(&employee).await? {
            Ok(employee)
        } else {
            Err(ServiceError::EmployeeNotFound(employee.employee_id))
        }
    }

    /// Resolve the root employee, then compute its reporting structure.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::EmployeeNotFound`] if the root or any
    /// referenced report is missing, or [`ServiceError::CycleDetected`] if
    /// the reporting graph repeats an employee.
    pub async fn read_reporting_structure(
        &self,
        id: &EmployeeId,
    ) -> Result<ReportingStructure, ServiceError> {
        debug!(employee_id = %id, "Reading reporting structure");

        let root = self.read(id).await?;
        Ok(compute_reporting_structure(self.store, root).await?)
    }
}
