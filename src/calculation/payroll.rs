//! Payroll runs over a whole roster.

use std::collections::HashSet;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayrollSummary, PayrollTotals, Payslip};

use super::salary_calculator::compute_salary;

/// Sums the dashboard totals for a set of employees.
///
/// No validation is performed; each employee is computed independently, so
/// the fold may be split across threads and the partial totals added.
pub fn payroll_totals(employees: &[Employee], rates: &RateTable) -> PayrollTotals {
    employees
        .iter()
        .map(|employee| PayrollTotals::from_breakdown(&compute_salary(employee, rates)))
        .sum()
}

/// Validates a roster and computes a payslip for every employee plus totals.
///
/// # Errors
///
/// - `DuplicateEmployee` if an ID appears more than once
/// - `InvalidEmployee` if any record fails [`Employee::validate`]
pub fn summarize_payroll(employees: &[Employee], rates: &RateTable) -> EngineResult<PayrollSummary> {
    let mut seen = HashSet::with_capacity(employees.len());
    for employee in employees {
        if !seen.insert(employee.id.as_str()) {
            return Err(EngineError::DuplicateEmployee {
                employee_id: employee.id.clone(),
            });
        }
        employee.validate()?;
    }

    let payslips: Vec<Payslip> = employees
        .iter()
        .map(|employee| Payslip {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
            breakdown: compute_salary(employee, rates),
        })
        .collect();

    let totals = payslips.iter().map(|p| &p.breakdown).sum();

    Ok(PayrollSummary {
        rate_table: rates.metadata.code.clone(),
        payslips,
        totals,
    })
}
