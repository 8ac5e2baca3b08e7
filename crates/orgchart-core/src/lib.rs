//! Reporting structure engine and services for the OrgChart service.
//!
//! This crate holds everything between the HTTP boundary and the stores:
//! the reporting structure computation, the thin employee and compensation
//! services that call it, and configuration loading.
//!
//! # Modules
//!
//! - [`reporting`] -- Cycle-safe reporting structure computation
//! - [`employee_service`] -- Employee create/read/update and reporting
//!   structure lookup
//! - [`compensation_service`] -- Compensation create/read
//! - [`config`] -- Typed configuration loaded from YAML
//! - [`error`] -- [`ServiceError`]

pub mod compensation_service;
pub mod config;
pub mod employee_service;
pub mod error;
pub mod reporting;

pub use compensation_service::CompensationService;
pub use config::{ConfigError, OrgChartConfig, StorageBackend};
pub use employee_service::EmployeeService;
pub use error::ServiceError;
pub use reporting::{ReportingError, compute_reporting_structure, count_reports};
