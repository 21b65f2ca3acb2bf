//! Family deductions and taxable income.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::Deductions;

/// Computes the personal and dependent deductions.
pub fn calculate_deductions(dependents: u32, rates: &RateTable) -> Deductions {
    let personal = rates.personal_deduction;
    let dependents = Decimal::from(dependents) * rates.dependent_deduction;

    Deductions {
        personal,
        dependents,
        total: personal + dependents,
    }
}

/// Pre-tax income after deductions, floored at zero.
pub fn taxable_income(pre_tax_income: Decimal, deductions: &Deductions) -> Decimal {
    (pre_tax_income - deductions.total).max(Decimal::ZERO)
}
