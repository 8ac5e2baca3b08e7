//! Runtime-selected storage backend.
//!
//! The store traits return `impl Future` and are not dyn-compatible, so
//! the backend chosen by configuration is held in an enum and every call
//! dispatches with a `match`.

use orgchart_types::{Compensation, Employee, EmployeeId};

use crate::error::DbError;
use crate::memory::MemoryStore;
use crate::postgres::PostgresPool;
use crate::store::{CompensationStore, EmployeeStore};

/// The configured employee/compensation backend.
#[derive(Debug)]
pub enum Storage {
    /// Volatile in-process maps.
    Memory(MemoryStore),
    /// `PostgreSQL` tables.
    Postgres(PostgresPool),
}

impl Storage {
    /// An empty in-memory backend.
    pub fn in_memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Human-readable backend name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl EmployeeStore for Storage {
    async fn find_employee(&self, id: &EmployeeId) -> Result<Option<Employee>, DbError> {
        match self {
            Self::Memory(store) => store.find_employee(id).await,
            Self::Postgres(pool) => pool.find_employee(id).await,
        }
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<(), DbError> {
        match self {
            Self::Memory(store) => store.insert_employee(employee).await,
            Self::Postgres(pool) => pool.insert_employee(employee).await,
        }
    }

    async fn update_employee(&self, employee: &Employee) -> Result<bool, DbError> {
        match self {
            Self::Memory(store) => store.update_employee(employee).await,
            Self::Postgres(pool) => pool.update_employee(employee).await,
        }
    }
}

impl CompensationStore for Storage {
    async fn insert_compensation(&self, compensation: &Compensation) -> Result<(), DbError> {
        match self {
            Self::Memory(store) => store.insert_compensation(compensation).await,
            Self::Postgres(pool) => pool.insert_compensation(compensation).await,
        }
    }

    async fn find_compensation(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Compensation>, DbError> {
        match self {
            Self::Memory(store) => store.find_compensation(employee_id).await,
            Self::Postgres(pool) => pool.find_compensation(employee_id).await,
        }
    }
}
