//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST API endpoints for computing one employee's
//! salary breakdown, summarizing a payroll run, and reading the loaded rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, InsuranceType, PayrollRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
