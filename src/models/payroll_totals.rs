//! Organisation-wide payroll totals.
//!
//! [`PayrollTotals`] is the dashboard aggregate. It forms a commutative monoid
//! under `+` with [`PayrollTotals::default`] as identity, so partial totals
//! computed over any split of the roster combine to the same figures.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryBreakdown;

/// Summed figures across a set of employees.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollTotals;
///
/// let totals: PayrollTotals = Vec::<PayrollTotals>::new().into_iter().sum();
/// assert_eq!(totals, PayrollTotals::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of employees included.
    pub headcount: u64,
    /// Sum of gross salaries.
    pub total_gross: Decimal,
    /// Sum of net pay.
    pub total_net: Decimal,
    /// Sum of income tax.
    pub total_tax: Decimal,
    /// Sum of employee-side insurance.
    pub total_employee_insurance: Decimal,
    /// Sum of employer cost.
    pub total_employer_cost: Decimal,
}

impl PayrollTotals {
    /// Totals for a single employee.
    pub fn from_breakdown(breakdown: &SalaryBreakdown) -> Self {
        Self {
            headcount: 1,
            total_gross: breakdown.gross,
            total_net: breakdown.net,
            total_tax: breakdown.tax,
            total_employee_insurance: breakdown.employee_insurance.total,
            total_employer_cost: breakdown.employer_cost,
        }
    }
}

impl Add for PayrollTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            headcount: self.headcount + other.headcount,
            total_gross: self.total_gross + other.total_gross,
            total_net: self.total_net + other.total_net,
            total_tax: self.total_tax + other.total_tax,
            total_employee_insurance: self.total_employee_insurance
                + other.total_employee_insurance,
            total_employer_cost: self.total_employer_cost + other.total_employer_cost,
        }
    }
}

impl AddAssign for PayrollTotals {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for PayrollTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a SalaryBreakdown> for PayrollTotals {
    fn sum<I: Iterator<Item = &'a SalaryBreakdown>>(iter: I) -> Self {
        iter.map(PayrollTotals::from_breakdown).sum()
    }
}

/// One employee's line in a payroll summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's department.
    pub department: String,
    /// Every derived figure for the employee.
    pub breakdown: SalaryBreakdown,
}

/// Per-employee breakdowns plus their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The code of the rate table used.
    pub rate_table: String,
    /// One payslip per employee, in input order.
    pub payslips: Vec<Payslip>,
    /// Sum over all payslips.
    pub totals: PayrollTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn totals(gross: &str, net: &str, tax: &str, insurance: &str, cost: &str) -> PayrollTotals {
        PayrollTotals {
            headcount: 1,
            total_gross: dec(gross),
            total_net: dec(net),
            total_tax: dec(tax),
            total_employee_insurance: dec(insurance),
            total_employer_cost: dec(cost),
        }
    }

    #[test]
    fn test_add_sums_every_field() {
        let a = totals("10000000", "8950000", "0", "1050000", "12350000");
        let b = totals("30000000", "25882500", "967500", "3150000", "37050000");

        let sum = a + b;
        assert_eq!(sum.headcount, 2);
        assert_eq!(sum.total_gross, dec("40000000"));
        assert_eq!(sum.total_net, dec("34832500"));
        assert_eq!(sum.total_tax, dec("967500"));
        assert_eq!(sum.total_employee_insurance, dec("4200000"));
        assert_eq!(sum.total_employer_cost, dec("49400000"));
    }

    #[test]
    fn test_default_is_identity() {
        let a = totals("10000000", "8950000", "0", "1050000", "12350000");
        assert_eq!(a + PayrollTotals::default(), a);
        assert_eq!(PayrollTotals::default() + a, a);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let items = vec![
            totals("1.5", "1.2", "0.1", "0.2", "1.8"),
            totals("2.25", "2", "0.05", "0.2", "2.6"),
            totals("3", "2.5", "0.2", "0.3", "3.5"),
        ];

        let forward: PayrollTotals = items.iter().copied().sum();
        let backward: PayrollTotals = items.iter().rev().copied().sum();
        let split = items[..1].iter().copied().sum::<PayrollTotals>()
            + items[1..].iter().copied().sum::<PayrollTotals>();

        assert_eq!(forward, backward);
        assert_eq!(forward, split);
    }

    #[test]
    fn test_add_assign_matches_add() {
        let a = totals("1", "1", "0", "0", "1");
        let b = totals("2", "2", "0", "0", "2");
        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }
}
