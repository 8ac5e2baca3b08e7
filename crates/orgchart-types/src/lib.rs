//! Shared type definitions for the OrgChart service.
//!
//! This crate is the single source of truth for the records exchanged
//! between the stores, the services, and the HTTP API. Types flow
//! downstream to `TypeScript` via `ts-rs` for API clients.
//!
//! # Modules
//!
//! - [`ids`] -- The [`EmployeeId`] identifier
//! - [`structs`] -- Employee, direct report, compensation, and reporting
//!   structure records

pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::EmployeeId;
pub use structs::{Compensation, DirectReport, Employee, EmployeeDraft, ReportingStructure};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // The files are written to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        let _ = crate::ids::EmployeeId::export_all();
        let _ = crate::structs::Employee::export_all();
        let _ = crate::structs::EmployeeDraft::export_all();
        let _ = crate::structs::Compensation::export_all();
        let _ = crate::structs::ReportingStructure::export_all();
    }
}
