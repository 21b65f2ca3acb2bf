//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the assembled
//! [`RateTable`] the calculator reads.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Region;

/// Metadata about the regulation a rate table encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableMetadata {
    /// Short identifier for the table (e.g., "VN2024").
    pub code: String,
    /// The human-readable name of the table.
    pub name: String,
    /// The date the rates take effect.
    pub effective_date: NaiveDate,
    /// URL or citation for the governing regulation.
    pub source_url: String,
}

/// Monthly minimum wage for each region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalMinWages {
    /// Region I minimum wage.
    pub region_1: Decimal,
    /// Region II minimum wage.
    pub region_2: Decimal,
    /// Region III minimum wage.
    pub region_3: Decimal,
    /// Region IV minimum wage.
    pub region_4: Decimal,
}

impl RegionalMinWages {
    /// Returns the minimum wage for a region.
    pub fn for_region(&self, region: Region) -> Decimal {
        match region {
            Region::One => self.region_1,
            Region::Two => self.region_2,
            Region::Three => self.region_3,
            Region::Four => self.region_4,
        }
    }
}

/// Contribution rates withheld from the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInsuranceRates {
    /// Social (retirement) insurance rate, applied to the primary base.
    pub retirement: Decimal,
    /// Health insurance rate, applied to the primary base.
    pub health: Decimal,
    /// Unemployment insurance rate, applied to the unemployment base.
    pub unemployment: Decimal,
}

/// Contribution rates paid by the employer on top of gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerInsuranceRates {
    /// Social (retirement) insurance rate, applied to the primary base.
    pub retirement: Decimal,
    /// Health insurance rate, applied to the primary base.
    pub health: Decimal,
    /// Unemployment insurance rate, applied to the unemployment base.
    pub unemployment: Decimal,
    /// Flat union levy, applied to the uncapped insurance basis.
    pub union_levy: Decimal,
}

/// One bracket of the progressive income-tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Cumulative upper bound of taxable income for this bracket.
    /// `None` marks the final, unbounded bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied to income inside this bracket.
    pub rate: Decimal,
}

/// Structure of `statutory.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryConfig {
    /// Metadata for the whole table.
    pub metadata: RateTableMetadata,
    /// Statutory base salary.
    pub base_salary: Decimal,
    /// Regional minimum wages.
    pub regional_min_wage: RegionalMinWages,
}

/// Structure of `insurance.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceConfig {
    /// Employee-side rates.
    pub employee: EmployeeInsuranceRates,
    /// Employer-side rates.
    pub employer: EmployerInsuranceRates,
}

/// Structure of `personal_income_tax.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxConfig {
    /// Flat deduction every employee receives.
    pub personal_deduction: Decimal,
    /// Deduction per registered dependent.
    pub dependent_deduction: Decimal,
    /// Brackets in ascending order.
    pub brackets: Vec<TaxBracket>,
}

/// The complete rate table.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// across threads and requests freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Which regulation this table encodes.
    pub metadata: RateTableMetadata,
    /// Statutory base salary; 20x this caps the primary insurance base.
    pub base_salary: Decimal,
    /// Regional minimum wages; 20x the employee's region caps the
    /// unemployment insurance base.
    pub regional_min_wage: RegionalMinWages,
    /// Employee-side contribution rates.
    pub employee_rates: EmployeeInsuranceRates,
    /// Employer-side contribution rates.
    pub employer_rates: EmployerInsuranceRates,
    /// Flat deduction every employee receives.
    pub personal_deduction: Decimal,
    /// Deduction per registered dependent.
    pub dependent_deduction: Decimal,
    /// Progressive tax brackets in ascending order.
    pub tax_brackets: Vec<TaxBracket>,
}

impl RateTable {
    /// Assembles a rate table from its three configuration files.
    pub fn from_parts(
        statutory: StatutoryConfig,
        insurance: InsuranceConfig,
        income_tax: IncomeTaxConfig,
    ) -> Self {
        Self {
            metadata: statutory.metadata,
            base_salary: statutory.base_salary,
            regional_min_wage: statutory.regional_min_wage,
            employee_rates: insurance.employee,
            employer_rates: insurance.employer,
            personal_deduction: income_tax.personal_deduction,
            dependent_deduction: income_tax.dependent_deduction,
            tax_brackets: income_tax.brackets,
        }
    }

    /// Checks the structural rules the calculator relies on.
    ///
    /// - base salary and every regional minimum wage are positive
    /// - every rate lies in `[0, 1]`
    /// - deductions are non-negative
    /// - brackets are non-empty, bounds strictly increase, only the last
    ///   bracket is unbounded, and rates strictly increase
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_salary <= Decimal::ZERO {
            return Err(invalid("base_salary must be positive"));
        }
        for region in Region::ALL {
            if self.regional_min_wage.for_region(region) <= Decimal::ZERO {
                return Err(invalid(format!(
                    "regional minimum wage for region {} must be positive",
                    region.ordinal()
                )));
            }
        }

        let rates = [
            ("employee.retirement", self.employee_rates.retirement),
            ("employee.health", self.employee_rates.health),
            ("employee.unemployment", self.employee_rates.unemployment),
            ("employer.retirement", self.employer_rates.retirement),
            ("employer.health", self.employer_rates.health),
            ("employer.unemployment", self.employer_rates.unemployment),
            ("employer.union_levy", self.employer_rates.union_levy),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(invalid(format!("{} rate {} is outside [0, 1]", name, rate)));
            }
        }

        if self.personal_deduction < Decimal::ZERO || self.dependent_deduction < Decimal::ZERO {
            return Err(invalid("deductions must not be negative"));
        }

        self.validate_brackets()
    }

    fn validate_brackets(&self) -> EngineResult<()> {
        let Some((last, bounded)) = self.tax_brackets.split_last() else {
            return Err(invalid("tax brackets must not be empty"));
        };

        if last.upper_bound.is_some() {
            return Err(invalid("the last tax bracket must be unbounded"));
        }

        let mut previous_bound = Decimal::ZERO;
        for (index, bracket) in bounded.iter().enumerate() {
            let Some(bound) = bracket.upper_bound else {
                return Err(invalid(format!(
                    "tax bracket {} is unbounded but is not the last bracket",
                    index + 1
                )));
            };
            if bound <= previous_bound {
                return Err(invalid(format!(
                    "tax bracket {} bound {} does not exceed the previous bound {}",
                    index + 1,
                    bound,
                    previous_bound
                )));
            }
            previous_bound = bound;
        }

        for (index, pair) in self.tax_brackets.windows(2).enumerate() {
            if pair[1].rate <= pair[0].rate {
                return Err(invalid(format!(
                    "tax bracket {} rate {} is not greater than the previous rate {}",
                    index + 2,
                    pair[1].rate,
                    pair[0].rate
                )));
            }
        }

        for (index, bracket) in self.tax_brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(invalid(format!(
                    "tax bracket {} rate {} is outside [0, 1]",
                    index + 1,
                    bracket.rate
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidRateTable {
        message: message.into(),
    }
}
