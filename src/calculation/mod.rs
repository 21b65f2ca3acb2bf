//! Calculation logic for the Payroll Engine.
//!
//! This module contains the salary calculator and its building blocks:
//! insurance basis capping, employee and employer contributions, family
//! deductions, progressive income tax, the audit trace that explains a
//! result, and roster-wide aggregation.

mod audit;
mod contributions;
mod deductions;
mod insurance_bases;
mod payroll;
mod progressive_tax;
mod salary_calculator;

#[cfg(test)]
mod test_support;

pub use audit::{build_audit_steps, collect_warnings};
pub use contributions::{
    calculate_employee_insurance, calculate_employer_contributions, employer_cost,
};
pub use deductions::{calculate_deductions, taxable_income};
pub use insurance_bases::{
    INSURANCE_CAP_MULTIPLIER, primary_insurance_cap, resolve_insurance_bases,
    unemployment_insurance_cap,
};
pub use payroll::{payroll_totals, summarize_payroll};
pub use progressive_tax::{ProgressiveTaxResult, calculate_progressive_tax};
pub use salary_calculator::compute_salary;
