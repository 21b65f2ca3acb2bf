//! Salary breakdown models.
//!
//! This module contains [`SalaryBreakdown`], the full set of figures derived
//! for one employee, and the component structures it is assembled from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The insurance basis and the two independently capped bases derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceBases {
    /// Uncapped amount contributions are derived from.
    pub basis: Decimal,
    /// Basis capped at 20x the statutory base salary. Used for retirement and
    /// health insurance.
    pub primary: Decimal,
    /// Basis capped at 20x the regional minimum wage. Used for unemployment
    /// insurance.
    pub unemployment: Decimal,
}

/// Insurance withheld from the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInsurance {
    /// Social (retirement) insurance.
    pub retirement: Decimal,
    /// Health insurance.
    pub health: Decimal,
    /// Unemployment insurance.
    pub unemployment: Decimal,
    /// Sum of the three components.
    pub total: Decimal,
}

/// Contributions the employer pays on top of gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Social (retirement) insurance.
    pub retirement: Decimal,
    /// Health insurance.
    pub health: Decimal,
    /// Unemployment insurance.
    pub unemployment: Decimal,
    /// Union levy, computed on the uncapped basis.
    pub union_levy: Decimal,
    /// Sum of the four components.
    pub total: Decimal,
}

/// Personal and dependent deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Flat personal deduction.
    pub personal: Decimal,
    /// Dependent deduction times the number of dependents.
    pub dependents: Decimal,
    /// Sum of both.
    pub total: Decimal,
}

/// The portion of taxable income that fell inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlice {
    /// 1-based position of the bracket in the schedule.
    pub bracket: usize,
    /// Lower bound of the bracket (the previous bracket's upper bound).
    pub lower_bound: Decimal,
    /// Upper bound of the bracket, `None` for the final bracket.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate of the bracket.
    pub rate: Decimal,
    /// Taxable income that fell inside the bracket.
    pub taxed_amount: Decimal,
    /// `taxed_amount * rate`.
    pub tax: Decimal,
}

/// Every monetary figure derived for one employee.
///
/// All amounts share the unit of the employee's gross salary. The breakdown
/// is derived on demand and never stored.
///
/// # Invariants
///
/// - `taxable_income == max(0, pre_tax_income - deductions.total)`
/// - `net == gross - employee_insurance.total - tax`
/// - `employer_cost == gross + employer_contributions.total`
/// - `tax` equals the sum of `tax_slices[..].tax`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Gross salary.
    pub gross: Decimal,
    /// Insurance basis and capped bases.
    pub insurance_bases: InsuranceBases,
    /// Insurance withheld from the employee.
    pub employee_insurance: EmployeeInsurance,
    /// Employer-side contributions.
    pub employer_contributions: EmployerContributions,
    /// Total cost to the employer.
    pub employer_cost: Decimal,
    /// Gross minus employee insurance.
    pub pre_tax_income: Decimal,
    /// Personal and dependent deductions.
    pub deductions: Deductions,
    /// Pre-tax income after deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Progressive income tax.
    pub tax: Decimal,
    /// Per-bracket contributions to `tax`, only for brackets that taxed a
    /// positive amount.
    pub tax_slices: Vec<TaxSlice>,
    /// Take-home pay.
    pub net: Decimal,
}
