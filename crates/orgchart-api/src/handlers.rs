//! REST API endpoint handlers.
//!
//! Each handler builds the relevant service over the shared [`Storage`]
//! and maps [`ServiceError`] to HTTP through [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness probe |
//! | `POST` | `/employee` | Create an employee |
//! | `GET` | `/employee/{id}` | Read an employee |
//! | `PUT` | `/employee/{id}` | Replace an employee |
//! | `GET` | `/reporting/{id}` | Reporting structure for an employee |
//! | `POST` | `/compensation` | Create a compensation record |
//! | `GET` | `/compensation/{id}` | Current compensation for an employee |
//!
//! Request bodies that fail to parse are answered with 400 in the same
//! JSON error envelope as every other failure.
//!
//! [`Storage`]: orgchart_db::Storage
//! [`ServiceError`]: orgchart_core::ServiceError

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use orgchart_core::{CompensationService, EmployeeService};
use orgchart_types::{Compensation, Employee, EmployeeDraft, EmployeeId, ReportingStructure};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report liveness and the active storage backend.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "storage": state.storage.name(),
    }))
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

/// Create an employee. Any `employeeId` in the body is ignored.
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Json(draft) = body?;
    let employee = EmployeeService::new(&state.storage).create(draft).await?;
    Ok(Json(employee))
}

/// Read a single employee.
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let employee = EmployeeService::new(&state.storage)
        .read(&EmployeeId::from(id))
        .await?;
    Ok(Json(employee))
}

/// Replace an employee in full. The identifier comes from the path.
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Json(draft) = body?;
    let employee = EmployeeService::new(&state.storage)
        .update(EmployeeId::from(id), draft)
        .await?;
    Ok(Json(employee))
}

// ---------------------------------------------------------------------------
// GET /reporting/{id}
// ---------------------------------------------------------------------------

/// Compute the reporting structure rooted at an employee.
///
/// A cycle in the stored reporting graph is answered with 500: it reflects
/// corrupted stored relationships, not a malformed request.
pub async fn get_reporting_structure(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ReportingStructure>, ApiError> {
    let structure = EmployeeService::new(&state.storage)
        .read_reporting_structure(&EmployeeId::from(id))
        .await?;
    Ok(Json(structure))
}

// ---------------------------------------------------------------------------
// Compensation
// ---------------------------------------------------------------------------

/// Create a compensation record for an existing employee.
pub async fn create_compensation(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Compensation>, JsonRejection>,
) -> Result<Json<Compensation>, ApiError> {
    let Json(compensation) = body?;
    let created = CompensationService::new(&state.storage)
        .create(compensation)
        .await?;
    Ok(Json(created))
}

/// Read the current compensation for an employee.
///
/// Unknown employee: 404. Known employee without compensation: 204.
pub async fn get_compensation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Compensation>, ApiError> {
    let compensation = CompensationService::new(&state.storage)
        .read(&EmployeeId::from(id))
        .await?;
    Ok(Json(compensation))
}
