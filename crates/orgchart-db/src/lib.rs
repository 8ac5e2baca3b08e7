//! Data layer for the OrgChart service.
//!
//! The services and the reporting engine only ever talk to the
//! [`EmployeeStore`] and [`CompensationStore`] traits. Two backends
//! implement them:
//!
//! ```text
//! Storage (enum dispatch)
//!     |
//!     +-- MemoryStore     (RwLock<BTreeMap>, dev + tests)
//!     |
//!     +-- PostgresPool
//!         |-- EmployeeTable      (employees, direct reports as JSONB)
//!         +-- CompensationTable  (compensations, append-only)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- Store traits
//! - [`memory`] -- In-memory backend
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`employee_table`] -- `employees` table operations
//! - [`compensation_table`] -- `compensations` table operations
//! - [`storage`] -- Runtime backend selection
//! - [`error`] -- Shared error types

pub mod compensation_table;
pub mod employee_table;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod storage;
pub mod store;

// Re-export primary types for convenience.
pub use compensation_table::{CompensationRow, CompensationTable};
pub use employee_table::{EmployeeRow, EmployeeTable};
pub use error::DbError;
pub use memory::MemoryStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use storage::Storage;
pub use store::{CompensationStore, EmployeeStore};
