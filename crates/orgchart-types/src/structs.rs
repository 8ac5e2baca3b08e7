//! Core record types: employees, direct reports, compensation, and the
//! computed reporting structure.
//!
//! All types serialize to camelCase JSON. Optional fields are emitted as
//! `null` rather than omitted, so a record always carries the same keys.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EmployeeId;

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// A stored employee record.
///
/// The Employee Store is the sole source of truth. Values of this type
/// are snapshots: a full direct report nested inside another employee may
/// be stale relative to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Employee {
    /// Unique identifier, assigned at creation.
    pub employee_id: EmployeeId,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Organizational department.
    #[serde(default)]
    pub department: Option<String>,
    /// Ordered direct-report entries. `None` and an empty list are
    /// distinct: an explicit empty list counts as populated data.
    #[serde(default)]
    #[ts(as = "Option<Vec<Employee>>")]
    pub direct_reports: Option<Vec<DirectReport>>,
}

impl Employee {
    /// Build a shallow employee value carrying only an identifier.
    pub const fn reference(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            first_name: None,
            last_name: None,
            position: None,
            department: None,
            direct_reports: None,
        }
    }

    /// Whether this value carries nothing but its identifier.
    ///
    /// This is the shallow-reference heuristic applied at the wire
    /// boundary. Exactly five fields are inspected: first name, last name,
    /// department, position, and the direct-report list. A record with
    /// any one of them populated is treated as full.
    pub const fn is_shallow(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.department.is_none()
            && self.position.is_none()
            && self.direct_reports.is_none()
    }

    /// Number of direct-report entries on this record (0 when absent).
    pub fn direct_report_count(&self) -> usize {
        self.direct_reports.as_ref().map_or(0, Vec::len)
    }
}

// ---------------------------------------------------------------------------
// DirectReport
// ---------------------------------------------------------------------------

/// One entry in an employee's direct-report list.
///
/// On the wire every entry is an employee-shaped object. Decoding applies
/// [`Employee::is_shallow`]: an object carrying only `employeeId` becomes a
/// [`DirectReport::Reference`], anything else a [`DirectReport::Full`].
/// Encoding a reference emits the identifier with every other field
/// `null`, so both forms round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Employee", into = "Employee")]
pub enum DirectReport {
    /// A complete employee snapshot, used as-is during traversal.
    Full(Employee),
    /// An identifier-only placeholder, resolved against the store.
    Reference(EmployeeId),
}

impl DirectReport {
    /// The identifier of the employee this entry points at.
    pub const fn employee_id(&self) -> &EmployeeId {
        match self {
            Self::Full(employee) => &employee.employee_id,
            Self::Reference(id) => id,
        }
    }

    /// Whether this entry must be re-fetched from the store.
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

impl From<Employee> for DirectReport {
    fn from(employee: Employee) -> Self {
        if employee.is_shallow() {
            Self::Reference(employee.employee_id)
        } else {
            Self::Full(employee)
        }
    }
}

impl From<DirectReport> for Employee {
    fn from(report: DirectReport) -> Self {
        match report {
            DirectReport::Full(employee) => employee,
            DirectReport::Reference(id) => Self::reference(id),
        }
    }
}

// ---------------------------------------------------------------------------
// EmployeeDraft
// ---------------------------------------------------------------------------

/// Request body for creating or fully replacing an employee.
///
/// Carries every employee field except the identifier. A caller-supplied
/// `employeeId` is accepted and ignored: creation assigns a fresh one and
/// updates take the identifier from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EmployeeDraft {
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Organizational department.
    #[serde(default)]
    pub department: Option<String>,
    /// Direct-report entries, stored exactly as given.
    #[serde(default)]
    #[ts(as = "Option<Vec<Employee>>")]
    pub direct_reports: Option<Vec<DirectReport>>,
}

impl EmployeeDraft {
    /// Attach an identifier, producing a storable [`Employee`].
    pub fn into_employee(self, employee_id: EmployeeId) -> Employee {
        Employee {
            employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports: self.direct_reports,
        }
    }
}

impl From<Employee> for EmployeeDraft {
    fn from(employee: Employee) -> Self {
        Self {
            first_name: employee.first_name,
            last_name: employee.last_name,
            position: employee.position,
            department: employee.department,
            direct_reports: employee.direct_reports,
        }
    }
}

// ---------------------------------------------------------------------------
// Compensation
// ---------------------------------------------------------------------------

/// A compensation record for one employee.
///
/// `employee` is a foreign key into the Employee Store. The store does not
/// enforce it; the compensation service validates it on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Compensation {
    /// The employee this compensation belongs to.
    pub employee: EmployeeId,
    /// Annual salary. Must be non-negative. Written to JSON as a number.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(as = "f64")]
    pub salary: Decimal,
    /// Calendar date the salary takes effect (`YYYY-MM-DD`).
    pub effective_date: NaiveDate,
}

// ---------------------------------------------------------------------------
// ReportingStructure
// ---------------------------------------------------------------------------

/// The root employee paired with the transitive count of everyone beneath
/// them. Valid only at the moment of computation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ReportingStructure {
    /// The fully-resolved root employee.
    pub employee: Employee,
    /// Number of distinct employees transitively below the root.
    pub number_of_reports: u64,
}
