//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod payroll_totals;
mod salary_breakdown;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use employee::{Employee, InsuranceBasis, MAX_MONTHLY_AMOUNT, Region};
pub use payroll_totals::{PayrollSummary, PayrollTotals, Payslip};
pub use salary_breakdown::{
    Deductions, EmployeeInsurance, EmployerContributions, InsuranceBases, SalaryBreakdown,
    TaxSlice,
};
