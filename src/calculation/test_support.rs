//! Shared fixtures for calculation unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::{
    EmployeeInsuranceRates, EmployerInsuranceRates, RateTable, RateTableMetadata,
    RegionalMinWages, TaxBracket,
};
use crate::models::{Employee, InsuranceBasis, Region};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn bracket(upper_bound: Option<&str>, rate: &str) -> TaxBracket {
    TaxBracket {
        upper_bound: upper_bound.map(dec),
        rate: dec(rate),
    }
}

/// The July 2024 table, built in code so unit tests do not touch the disk.
pub fn create_test_rates() -> RateTable {
    RateTable {
        metadata: RateTableMetadata {
            code: "VN2024".to_string(),
            name: "Vietnam payroll rates, July 2024".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            source_url: "https://example.com".to_string(),
        },
        base_salary: dec("2340000"),
        regional_min_wage: RegionalMinWages {
            region_1: dec("4960000"),
            region_2: dec("4410000"),
            region_3: dec("3860000"),
            region_4: dec("3450000"),
        },
        employee_rates: EmployeeInsuranceRates {
            retirement: dec("0.08"),
            health: dec("0.015"),
            unemployment: dec("0.01"),
        },
        employer_rates: EmployerInsuranceRates {
            retirement: dec("0.175"),
            health: dec("0.03"),
            unemployment: dec("0.01"),
            union_levy: dec("0.02"),
        },
        personal_deduction: dec("11000000"),
        dependent_deduction: dec("4400000"),
        tax_brackets: vec![
            bracket(Some("5000000"), "0.05"),
            bracket(Some("10000000"), "0.10"),
            bracket(Some("18000000"), "0.15"),
            bracket(Some("32000000"), "0.20"),
            bracket(Some("52000000"), "0.25"),
            bracket(Some("80000000"), "0.30"),
            bracket(None, "0.35"),
        ],
    }
}

pub fn create_test_employee(gross: &str, dependents: u32) -> Employee {
    Employee {
        id: "NV1001".to_string(),
        name: "Nguyen Van A".to_string(),
        role: "Engineer".to_string(),
        department: "R&D".to_string(),
        gross_salary: dec(gross),
        insurance_basis: InsuranceBasis::UseGross,
        dependents,
        region: Region::One,
    }
}
