//! Reporting structure engine.
//!
//! Given a root [`Employee`], walks the direct-report graph and
//! counts every employee transitively below the root. Three concerns are
//! handled during the walk:
//!
//! - **Shallow references.** A [`DirectReport::Reference`] carries only an
//!   identifier; its direct reports are taken from the record currently in
//!   the store. A [`DirectReport::Full`] snapshot is used as-is. The same
//!   rule applies to a root that carries nothing but its identifier.
//! - **Aggregation.** Each visited employee contributes the length of its
//!   direct-report list; the root itself is not counted.
//! - **Cycles.** Every visited identifier goes into a set owned by the
//!   single invocation. Reaching an identifier a second time aborts the
//!   whole computation with [`ReportingError::CycleDetected`].
//!
//! The walk is depth-first over an explicit work stack. Children are
//! pushed in reverse so they pop in list order, which gives the same visit
//! order (and the same first error) as the recursive formulation without
//! tying hierarchy depth to call-stack depth.

use std::borrow::Cow;
use std::collections::BTreeSet;

use orgchart_db::{DbError, EmployeeStore};
use orgchart_types::{DirectReport, Employee, EmployeeId, ReportingStructure};
use tracing::{debug, warn};

/// Errors that terminate a reporting structure computation.
///
/// None of these are retried: walking the same stored graph again hits the
/// same cycle or the same missing record.
#[derive(Debug, thiserror::Error)]
pub enum ReportingError {
    /// The reporting graph reached the same employee twice.
    #[error("cycle in reporting structure: employee {0} reached twice")]
    CycleDetected(EmployeeId),

    /// A direct-report reference points at an identifier the store does
    /// not know.
    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    /// The store failed while resolving a reference.
    #[error("store error: {0}")]
    Store(#[from] DbError),
}

/// Compute the reporting structure rooted at `root`.
///
/// An identifier-only root is replaced by its stored record first, and
/// that record is what the result carries.
///
/// # Errors
///
/// Returns [`ReportingError::CycleDetected`] if any identifier repeats,
/// [`ReportingError::EmployeeNotFound`] if a reference cannot be resolved,
/// or [`ReportingError::Store`] if a lookup fails. No partial result is
/// produced.
pub async fn compute_reporting_structure<S: EmployeeStore>(
    store: &S,
    root: Employee,
) -> Result<ReportingStructure, ReportingError> {
    let root = if root.is_shallow() {
        resolve(store, &root.employee_id).await?
    } else {
        root
    };
    let number_of_reports = walk(store, &root).await?;

    debug!(
        employee_id = %root.employee_id,
        number_of_reports,
        "Computed reporting structure"
    );

    Ok(ReportingStructure {
        employee: root,
        number_of_reports,
    })
}

/// Count every employee transitively below `root`. An identifier-only
/// root is resolved against the store like any other shallow reference.
///
/// # Errors
///
/// Same as [`compute_reporting_structure`].
pub async fn count_reports<S: EmployeeStore>(
    store: &S,
    root: &Employee,
) -> Result<u64, ReportingError> {
    if root.is_shallow() {
        let resolved = resolve(store, &root.employee_id).await?;
        return walk(store, &resolved).await;
    }
    walk(store, root).await
}

async fn walk<S: EmployeeStore>(store: &S, root: &Employee) -> Result<u64, ReportingError> {
    let mut traversal = Traversal::default();
    traversal.visit(&root.employee_id)?;
    traversal.schedule_borrowed(root.direct_reports.as_deref());

    while let Some(node) = traversal.pending.pop() {
        traversal.visit(node.employee_id())?;

        let reports = match node {
            Cow::Borrowed(DirectReport::Full(employee)) => {
                traversal.schedule_borrowed(employee.direct_reports.as_deref());
                continue;
            }
            Cow::Owned(DirectReport::Full(employee)) => employee.direct_reports,
            Cow::Borrowed(DirectReport::Reference(id)) => resolve(store, id).await?.direct_reports,
            Cow::Owned(DirectReport::Reference(id)) => resolve(store, &id).await?.direct_reports,
        };
        traversal.schedule_owned(reports);
    }

    Ok(traversal.total)
}

/// Fetch the stored record behind a shallow reference.
async fn resolve<S: EmployeeStore>(store: &S, id: &EmployeeId) -> Result<Employee, ReportingError> {
    debug!(employee_id = %id, "Resolving shallow employee reference");
    store
        .find_employee(id)
        .await?
        .ok_or_else(|| ReportingError::EmployeeNotFound(id.clone()))
}

/// State of one walk. Never shared between invocations.
#[derive(Default)]
struct Traversal<'r> {
    visited: BTreeSet<EmployeeId>,
    /// Entries still to visit; borrowed from the root or owned after a
    /// store fetch.
    pending: Vec<Cow<'r, DirectReport>>,
    total: u64,
}

impl<'r> Traversal<'r> {
    fn visit(&mut self, id: &EmployeeId) -> Result<(), ReportingError> {
        if self.visited.insert(id.clone()) {
            return Ok(());
        }
        warn!(employee_id = %id, "Cycle detected in reporting structure");
        Err(ReportingError::CycleDetected(id.clone()))
    }

    fn schedule_borrowed(&mut self, reports: Option<&'r [DirectReport]>) {
        if let Some(reports) = reports {
            self.add(reports.len());
            self.pending.extend(reports.iter().rev().map(Cow::Borrowed));
        }
    }

    fn schedule_owned(&mut self, reports: Option<Vec<DirectReport>>) {
        if let Some(reports) = reports {
            self.add(reports.len());
            self.pending.extend(reports.into_iter().rev().map(Cow::Owned));
        }
    }

    fn add(&mut self, count: usize) {
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        self.total = self.total.saturating_add(count);
    }
}
