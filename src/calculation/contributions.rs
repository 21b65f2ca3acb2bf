//! Employee withholding and employer contributions.
//!
//! Both sides apply their rates to the capped bases. The one exception is the
//! employer's union levy, which is charged on the uncapped insurance basis.

use rust_decimal::Decimal;

use crate::config::{EmployeeInsuranceRates, EmployerInsuranceRates};
use crate::models::{EmployeeInsurance, EmployerContributions, InsuranceBases};

/// Computes the insurance withheld from the employee.
///
/// Retirement and health use the primary base; unemployment uses the
/// unemployment base.
pub fn calculate_employee_insurance(
    bases: &InsuranceBases,
    rates: &EmployeeInsuranceRates,
) -> EmployeeInsurance {
    let retirement = bases.primary * rates.retirement;
    let health = bases.primary * rates.health;
    let unemployment = bases.unemployment * rates.unemployment;

    EmployeeInsurance {
        retirement,
        health,
        unemployment,
        total: retirement + health + unemployment,
    }
}

/// Computes what the employer pays on top of gross salary.
pub fn calculate_employer_contributions(
    bases: &InsuranceBases,
    rates: &EmployerInsuranceRates,
) -> EmployerContributions {
    let retirement = bases.primary * rates.retirement;
    let health = bases.primary * rates.health;
    let unemployment = bases.unemployment * rates.unemployment;
    let union_levy = bases.basis * rates.union_levy;

    EmployerContributions {
        retirement,
        health,
        unemployment,
        union_levy,
        total: retirement + health + unemployment + union_levy,
    }
}

/// Gross salary plus every employer contribution.
pub fn employer_cost(gross: Decimal, contributions: &EmployerContributions) -> Decimal {
    gross + contributions.total
}
