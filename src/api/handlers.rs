//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_audit_steps, collect_warnings, compute_salary, summarize_payroll};
use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{AuditTrace, CalculationResult, Employee};

use super::request::{CalculationRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payroll/summary", post(payroll_summary_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's field path and message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts one employee and returns the salary breakdown with its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    // Convert request types to domain types
    let employee: Employee = request.employee.into();

    // Perform the calculation
    match perform_calculation(&employee, state.rates()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                gross = %result.breakdown.gross,
                net = %result.breakdown.net,
                tax = %result.breakdown.tax,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates one employee and computes its result with an audit trace.
fn perform_calculation(employee: &Employee, rates: &RateTable) -> EngineResult<CalculationResult> {
    // Reject records outside the calculator's input domain
    employee.validate()?;

    let start_time = Instant::now();
    let breakdown = compute_salary(employee, rates);
    let steps = build_audit_steps(employee, rates, &breakdown);
    let warnings = collect_warnings(employee, rates, &breakdown);
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rate_table: rates.metadata.code.clone(),
        employee_id: employee.id.clone(),
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

/// Handler for POST /payroll/summary endpoint.
///
/// Accepts a roster and returns one payslip per employee plus totals.
async fn payroll_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll summary request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    // Duplicates and invalid records fail the whole run
    let start_time = Instant::now();
    match summarize_payroll(&employees, state.rates()) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                headcount = summary.totals.headcount,
                total_net = %summary.totals.total_net,
                total_employer_cost = %summary.totals.total_employer_cost,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Payroll summary completed successfully"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll summary rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /rates endpoint.
async fn rates_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.rates())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{EmployeeRequest, InsuranceType};
    use crate::config::ConfigLoader;
    use crate::models::{PayrollSummary, Region};
    use axum::{
        body::{Body, Bytes},
        http::Request,
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/vn2024").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_employee_request(id: &str, gross: &str, dependents: u32) -> EmployeeRequest {
        EmployeeRequest {
            id: id.to_string(),
            name: "Nguyen Van A".to_string(),
            role: "Engineer".to_string(),
            department: "R&D".to_string(),
            gross_salary: dec(gross),
            insurance_type: InsuranceType::Gross,
            custom_insurance_salary: Decimal::ZERO,
            dependents,
            region: Region::One,
        }
    }

    async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Bytes) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let request = CalculationRequest {
            employee: create_employee_request("NV1001", "30000000", 1),
        };

        let (status, body) =
            post_json(router, "/calculate", serde_json::to_string(&request).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.employee_id, "NV1001");
        assert_eq!(result.rate_table, "VN2024");
        assert_eq!(result.breakdown.tax, dec("967500"));
        assert_eq!(result.breakdown.net, dec("25882500"));
        assert_eq!(result.audit_trace.steps.len(), 6);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(router, "/calculate", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_gross_salary_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, body) = post_json(
            router,
            "/calculate",
            r#"{ "employee": { "id": "NV1001" } }"#.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("gross_salary"), "{}", error.message);
    }

    #[tokio::test]
    async fn test_negative_salary_returns_invalid_employee() {
        let router = create_router(create_test_state());
        let request = CalculationRequest {
            employee: create_employee_request("NV1001", "-1", 0),
        };

        let (status, body) =
            post_json(router, "/calculate", serde_json::to_string(&request).unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_EMPLOYEE");
    }

    #[tokio::test]
    async fn test_payroll_summary_returns_totals() {
        let router = create_router(create_test_state());
        let request = PayrollRequest {
            employees: vec![
                create_employee_request("NV1001", "10000000", 0),
                create_employee_request("NV1002", "30000000", 1),
            ],
        };

        let (status, body) = post_json(
            router,
            "/payroll/summary",
            serde_json::to_string(&request).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let summary: PayrollSummary = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.payslips.len(), 2);
        assert_eq!(summary.totals.headcount, 2);
        assert_eq!(summary.totals.total_net, dec("34832500"));
        assert_eq!(summary.totals.total_tax, dec("967500"));
    }

    #[tokio::test]
    async fn test_payroll_summary_rejects_duplicate_ids() {
        let router = create_router(create_test_state());
        let request = PayrollRequest {
            employees: vec![
                create_employee_request("NV1001", "10000000", 0),
                create_employee_request("NV1001", "30000000", 1),
            ],
        };

        let (status, body) = post_json(
            router,
            "/payroll/summary",
            serde_json::to_string(&request).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "DUPLICATE_EMPLOYEE");
    }

    #[tokio::test]
    async fn test_rates_endpoint_returns_loaded_table() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/rates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let rates: RateTable = serde_json::from_slice(&body).unwrap();
        assert_eq!(rates.metadata.code, "VN2024");
        assert_eq!(rates.tax_brackets.len(), 7);
    }
}
