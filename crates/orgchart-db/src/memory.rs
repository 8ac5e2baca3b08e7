//! In-memory store backend.
//!
//! Holds employees and compensations in [`BTreeMap`]s behind Tokio
//! read-write locks. Used for local development and tests; contents are
//! lost when the process exits.

use std::collections::BTreeMap;

use orgchart_types::{Compensation, Employee, EmployeeId};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::{CompensationStore, EmployeeStore};

/// Volatile employee and compensation storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: RwLock<BTreeMap<EmployeeId, Employee>>,
    compensations: RwLock<BTreeMap<EmployeeId, Vec<Compensation>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored employee records.
    pub async fn employee_count(&self) -> usize {
        self.employees.read().await.len()
    }

    /// Number of stored compensation records across all employees.
    pub async fn compensation_count(&self) -> usize {
        self.compensations.read().await.values().map(Vec::len).sum()
    }
}

impl EmployeeStore for MemoryStore {
    async fn find_employee(&self, id: &EmployeeId) -> Result<Option<Employee>, DbError> {
        Ok(self.employees.read().await.get(id).cloned())
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<(), DbError> {
        let mut employees = self.employees.write().await;
        if employees.contains_key(&employee.employee_id) {
            return Err(DbError::DuplicateEmployee(employee.employee_id.to_string()));
        }
        employees.insert(employee.employee_id.clone(), employee.clone());
        Ok(())
    }

    async fn update_employee(&self, employee: &Employee) -> Result<bool, DbError> {
        let mut employees = self.employees.write().await;
        match employees.get_mut(&employee.employee_id) {
            Some(slot) => {
                employee.clone_into(slot);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl CompensationStore for MemoryStore {
    async fn insert_compensation(&self, compensation: &Compensation) -> Result<(), DbError> {
        self.compensations
            .write()
            .await
            .entry(compensation.employee.clone())
            .or_default()
            .push(compensation.clone());
        Ok(())
    }

    async fn find_compensation(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Compensation>, DbError> {
        let compensations = self.compensations.read().await;
        // max_by_key keeps the last of equal maxima, i.e. the latest insert.
        Ok(compensations
            .get(employee_id)
            .and_then(|records| records.iter().max_by_key(|c| c.effective_date))
            .cloned())
    }
}
