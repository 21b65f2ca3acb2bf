//! Employee model and related types.
//!
//! This module defines the Employee struct along with the [`Region`] and
//! [`InsuranceBasis`] enums that select which caps and bases apply to a worker.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest gross salary or custom insurance basis accepted, 10^15.
///
/// Far above any real monthly pay and far enough below `Decimal::MAX` that
/// contributions, employer cost and roster totals cannot overflow.
pub const MAX_MONTHLY_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// One of the four regional minimum-wage tiers.
///
/// Serialized as its ordinal (1 to 4), which is how roster records store it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Region {
    /// Region I (highest minimum wage).
    #[default]
    One,
    /// Region II.
    Two,
    /// Region III.
    Three,
    /// Region IV (lowest minimum wage).
    Four,
}

impl Region {
    /// All regions in ordinal order.
    pub const ALL: [Region; 4] = [Region::One, Region::Two, Region::Three, Region::Four];

    /// Returns the ordinal of this region (1 to 4).
    pub fn ordinal(self) -> u8 {
        match self {
            Region::One => 1,
            Region::Two => 2,
            Region::Three => 3,
            Region::Four => 4,
        }
    }
}

impl TryFrom<u8> for Region {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Region::One),
            2 => Ok(Region::Two),
            3 => Ok(Region::Three),
            4 => Ok(Region::Four),
            other => Err(format!("region must be between 1 and 4, got {}", other)),
        }
    }
}

impl From<Region> for u8 {
    fn from(region: Region) -> Self {
        region.ordinal()
    }
}

/// Selects the amount mandatory insurance contributions are derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum InsuranceBasis {
    /// Contributions are based on the gross salary.
    #[default]
    UseGross,
    /// Contributions are based on a declared amount, which may be above or
    /// below the gross salary.
    Custom(Decimal),
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "NV1234").
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Job title.
    #[serde(default)]
    pub role: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: String,
    /// Contractual monthly pay before any withholding.
    pub gross_salary: Decimal,
    /// Which amount insurance contributions are based on.
    #[serde(default)]
    pub insurance_basis: InsuranceBasis,
    /// Number of registered tax dependents.
    #[serde(default)]
    pub dependents: u32,
    /// Regional minimum-wage tier.
    #[serde(default)]
    pub region: Region,
}

impl Employee {
    /// Returns the uncapped amount insurance contributions are based on.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, InsuranceBasis, Region};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "NV1001".to_string(),
    ///     name: "Nguyen Van A".to_string(),
    ///     role: "Engineer".to_string(),
    ///     department: "R&D".to_string(),
    ///     gross_salary: Decimal::new(30_000_000, 0),
    ///     insurance_basis: InsuranceBasis::Custom(Decimal::new(5_000_000, 0)),
    ///     dependents: 0,
    ///     region: Region::One,
    /// };
    /// assert_eq!(employee.insurance_basis_amount(), Decimal::new(5_000_000, 0));
    /// ```
    pub fn insurance_basis_amount(&self) -> Decimal {
        match self.insurance_basis {
            InsuranceBasis::UseGross => self.gross_salary,
            InsuranceBasis::Custom(amount) => amount,
        }
    }

    /// Checks the record is inside the calculator's input domain.
    ///
    /// The calculator trusts its input; callers run this at the data-entry
    /// boundary before computing.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(self.invalid("id", "must not be empty"));
        }
        if self.gross_salary < Decimal::ZERO {
            return Err(self.invalid("gross_salary", "must not be negative"));
        }
        if self.gross_salary > MAX_MONTHLY_AMOUNT {
            return Err(self.invalid("gross_salary", "exceeds the maximum monthly amount"));
        }
        if let InsuranceBasis::Custom(amount) = self.insurance_basis {
            if amount < Decimal::ZERO {
                return Err(self.invalid("insurance_basis", "custom amount must not be negative"));
            }
            if amount > MAX_MONTHLY_AMOUNT {
                return Err(self.invalid(
                    "insurance_basis",
                    "custom amount exceeds the maximum monthly amount",
                ));
            }
        }
        Ok(())
    }

    fn invalid(&self, field: &str, message: &str) -> EngineError {
        EngineError::InvalidEmployee {
            employee_id: self.id.clone(),
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
