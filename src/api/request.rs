//! Request types for the Payroll Engine API.
//!
//! The employee shape mirrors a roster record as the roster and sheet-sync
//! collaborators store it: a flat `insurance_type` switch plus a
//! `custom_insurance_salary` that only matters when the switch is `custom`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, InsuranceBasis, Region};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee to compute.
    pub employee: EmployeeRequest,
}

/// Request body for the `/payroll/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The roster to compute.
    pub employees: Vec<EmployeeRequest>,
}

/// Which amount insurance is based on, as stored on the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceType {
    /// Use gross salary.
    #[default]
    Gross,
    /// Use `custom_insurance_salary`.
    Custom,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Job title.
    #[serde(default)]
    pub role: String,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Insurance basis switch.
    #[serde(default)]
    pub insurance_type: InsuranceType,
    /// Declared insurance salary, used when `insurance_type` is `custom`.
    #[serde(default)]
    pub custom_insurance_salary: Decimal,
    /// Number of registered dependents.
    #[serde(default)]
    pub dependents: u32,
    /// Regional minimum-wage tier (1 to 4).
    #[serde(default)]
    pub region: Region,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        let insurance_basis = match req.insurance_type {
            InsuranceType::Gross => InsuranceBasis::UseGross,
            InsuranceType::Custom => InsuranceBasis::Custom(req.custom_insurance_salary),
        };

        Employee {
            id: req.id,
            name: req.name,
            role: req.role,
            department: req.department,
            gross_salary: req.gross_salary,
            insurance_basis,
            dependents: req.dependents,
            region: req.region,
        }
    }
}
