//! HTTP API for the OrgChart service.
//!
//! This crate provides an Axum HTTP server that exposes employee CRUD,
//! reporting structure computation, and compensation endpoints as JSON.
//!
//! # Architecture
//!
//! Handlers are thin: each one builds an [`EmployeeService`] or
//! [`CompensationService`] over the shared [`Storage`] held in
//! [`AppState`] and converts the service result into a response.
//! Status mapping lives entirely in [`ApiError`].
//!
//! [`EmployeeService`]: orgchart_core::EmployeeService
//! [`CompensationService`]: orgchart_core::CompensationService
//! [`Storage`]: orgchart_db::Storage
//! [`ApiError`]: error::ApiError

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
