//! Insurance basis resolution and capping.
//!
//! The insurance basis is capped twice, independently: once against the
//! statutory base salary (retirement and health) and once against the
//! employee's regional minimum wage (unemployment). The two ceilings
//! generally differ and must never be merged into one.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{Employee, InsuranceBases, Region};

/// Multiplier applied to a reference wage to obtain a contribution ceiling.
pub const INSURANCE_CAP_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Ceiling for the retirement and health insurance base.
pub fn primary_insurance_cap(rates: &RateTable) -> Decimal {
    rates.base_salary * INSURANCE_CAP_MULTIPLIER
}

/// Ceiling for the unemployment insurance base in a region.
pub fn unemployment_insurance_cap(rates: &RateTable, region: Region) -> Decimal {
    rates.regional_min_wage.for_region(region) * INSURANCE_CAP_MULTIPLIER
}

/// Resolves an employee's insurance basis and caps it.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::resolve_insurance_bases;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{Employee, InsuranceBasis, Region};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/vn2024")?;
/// let employee = Employee {
///     id: "NV1001".to_string(),
///     name: String::new(),
///     role: String::new(),
///     department: String::new(),
///     gross_salary: Decimal::new(30_000_000, 0),
///     insurance_basis: InsuranceBasis::Custom(Decimal::new(150_000_000, 0)),
///     dependents: 0,
///     region: Region::Four,
/// };
///
/// let bases = resolve_insurance_bases(&employee, loader.rates());
/// assert_eq!(bases.primary, Decimal::new(46_800_000, 0));
/// assert_eq!(bases.unemployment, Decimal::new(69_000_000, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn resolve_insurance_bases(employee: &Employee, rates: &RateTable) -> InsuranceBases {
    let basis = employee.insurance_basis_amount();

    InsuranceBases {
        basis,
        primary: basis.min(primary_insurance_cap(rates)),
        unemployment: basis.min(unemployment_insurance_cap(rates, employee.region)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::test_support::{create_test_employee, create_test_rates, dec};
    use crate::models::InsuranceBasis;

    #[test]
    fn test_cap_multiplier_is_twenty() {
        assert_eq!(INSURANCE_CAP_MULTIPLIER, dec("20"));
    }

    #[test]
    fn test_caps_for_default_table() {
        let rates = create_test_rates();

        assert_eq!(primary_insurance_cap(&rates), dec("46800000"));
        assert_eq!(unemployment_insurance_cap(&rates, Region::One), dec("99200000"));
        assert_eq!(unemployment_insurance_cap(&rates, Region::Two), dec("88200000"));
        assert_eq!(unemployment_insurance_cap(&rates, Region::Three), dec("77200000"));
        assert_eq!(unemployment_insurance_cap(&rates, Region::Four), dec("69000000"));
    }

    #[test]
    fn test_basis_below_both_caps_is_unchanged() {
        let rates = create_test_rates();
        let employee = create_test_employee("10000000", 0);

        let bases = resolve_insurance_bases(&employee, &rates);

        assert_eq!(bases.basis, dec("10000000"));
        assert_eq!(bases.primary, dec("10000000"));
        assert_eq!(bases.unemployment, dec("10000000"));
    }

    #[test]
    fn test_only_primary_cap_binds_at_sixty_million() {
        let rates = create_test_rates();
        let employee = create_test_employee("60000000", 0);

        let bases = resolve_insurance_bases(&employee, &rates);

        assert_eq!(bases.primary, dec("46800000"));
        assert_eq!(bases.unemployment, dec("60000000"));
    }

    #[test]
    fn test_caps_diverge_above_both_ceilings() {
        let rates = create_test_rates();
        let mut employee = create_test_employee("30000000", 0);
        employee.insurance_basis = InsuranceBasis::Custom(dec("150000000"));
        employee.region = Region::Three;

        let bases = resolve_insurance_bases(&employee, &rates);

        assert_eq!(bases.basis, dec("150000000"));
        assert_eq!(bases.primary, dec("46800000"));
        assert_eq!(bases.unemployment, dec("77200000"));
        assert_ne!(bases.primary, bases.unemployment);
    }

    #[test]
    fn test_custom_basis_below_gross_is_used() {
        let rates = create_test_rates();
        let mut employee = create_test_employee("30000000", 0);
        employee.insurance_basis = InsuranceBasis::Custom(dec("5000000"));

        let bases = resolve_insurance_bases(&employee, &rates);

        assert_eq!(bases.basis, dec("5000000"));
        assert_eq!(bases.primary, dec("5000000"));
        assert_eq!(bases.unemployment, dec("5000000"));
    }

    #[test]
    fn test_zero_basis() {
        let rates = create_test_rates();
        let employee = create_test_employee("0", 0);

        let bases = resolve_insurance_bases(&employee, &rates);

        assert_eq!(bases.primary, Decimal::ZERO);
        assert_eq!(bases.unemployment, Decimal::ZERO);
    }
}
