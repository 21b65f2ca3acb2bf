//! Salary calculation.
//!
//! [`compute_salary`] turns one employee record into a full
//! [`SalaryBreakdown`]. It is a pure function of its two arguments: no I/O,
//! no logging, no shared state, and no failure modes. Input validation
//! happens before it is called (see [`Employee::validate`]).

use crate::config::RateTable;
use crate::models::{Employee, SalaryBreakdown};

use super::contributions::{
    calculate_employee_insurance, calculate_employer_contributions, employer_cost,
};
use super::deductions::{calculate_deductions, taxable_income};
use super::insurance_bases::resolve_insurance_bases;
use super::progressive_tax::calculate_progressive_tax;

/// Computes every monetary figure for one employee.
///
/// # Steps
///
/// 1. Resolve the insurance basis and cap it twice (primary, unemployment)
/// 2. Employee insurance on the capped bases
/// 3. Employer contributions; the union levy uses the uncapped basis
/// 4. Pre-tax income = gross - employee insurance
/// 5. Deductions and taxable income (floored at zero)
/// 6. Progressive tax over the bracket schedule
/// 7. Net = gross - employee insurance - tax
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::compute_salary;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{Employee, InsuranceBasis, Region};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/vn2024")?;
/// let employee = Employee {
///     id: "NV1001".to_string(),
///     name: "Nguyen Van A".to_string(),
///     role: "Engineer".to_string(),
///     department: "R&D".to_string(),
///     gross_salary: Decimal::new(30_000_000, 0),
///     insurance_basis: InsuranceBasis::UseGross,
///     dependents: 1,
///     region: Region::One,
/// };
///
/// let breakdown = compute_salary(&employee, loader.rates());
/// assert_eq!(breakdown.tax, Decimal::new(967_500, 0));
/// assert_eq!(breakdown.net, Decimal::new(25_882_500, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn compute_salary(employee: &Employee, rates: &RateTable) -> SalaryBreakdown {
    let gross = employee.gross_salary;

    let insurance_bases = resolve_insurance_bases(employee, rates);
    let employee_insurance = calculate_employee_insurance(&insurance_bases, &rates.employee_rates);
    let employer_contributions =
        calculate_employer_contributions(&insurance_bases, &rates.employer_rates);

    let pre_tax_income = gross - employee_insurance.total;
    let deductions = calculate_deductions(employee.dependents, rates);
    let taxable_income = taxable_income(pre_tax_income, &deductions);

    let progressive = calculate_progressive_tax(taxable_income, &rates.tax_brackets);
    let net = gross - employee_insurance.total - progressive.tax;

    SalaryBreakdown {
        gross,
        insurance_bases,
        employee_insurance,
        employer_cost: employer_cost(gross, &employer_contributions),
        employer_contributions,
        pre_tax_income,
        deductions,
        taxable_income,
        tax: progressive.tax,
        tax_slices: progressive.slices,
        net,
    }
}
