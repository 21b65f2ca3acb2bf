//! Progressive income tax.
//!
//! Tax is accumulated bracket by bracket: each marginal rate applies only to
//! the slice of taxable income that falls between the previous bracket's
//! upper bound and its own. This keeps tax continuous at every boundary,
//! unlike a lookup that applies one rate to the whole income.

use rust_decimal::Decimal;

use crate::config::TaxBracket;
use crate::models::TaxSlice;

/// The result of walking the bracket schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveTaxResult {
    /// Total tax.
    pub tax: Decimal,
    /// Brackets that taxed a positive amount, in ascending order.
    pub slices: Vec<TaxSlice>,
}

/// Computes progressive tax on `taxable_income`.
///
/// `brackets` must be in ascending bound order with the final bracket
/// unbounded, as [`RateTable::validate`](crate::config::RateTable::validate)
/// enforces. Zero or negative income yields zero tax and no slices.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_progressive_tax;
/// use payroll_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let brackets = vec![
///     TaxBracket { upper_bound: Some(Decimal::new(5_000_000, 0)), rate: Decimal::new(5, 2) },
///     TaxBracket { upper_bound: Some(Decimal::new(10_000_000, 0)), rate: Decimal::new(10, 2) },
///     TaxBracket { upper_bound: None, rate: Decimal::new(15, 2) },
/// ];
///
/// let result = calculate_progressive_tax(Decimal::new(11_450_000, 0), &brackets);
/// assert_eq!(result.tax, Decimal::new(967_500, 0));
/// assert_eq!(result.slices.len(), 3);
/// ```
pub fn calculate_progressive_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> ProgressiveTaxResult {
    let mut tax = Decimal::ZERO;
    let mut remaining = taxable_income;
    let mut previous_bound = Decimal::ZERO;
    let mut slices = Vec::new();

    for (index, bracket) in brackets.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let in_bracket = match bracket.upper_bound {
            Some(bound) => remaining.min((bound - previous_bound).max(Decimal::ZERO)),
            None => remaining,
        };

        if in_bracket > Decimal::ZERO {
            let slice_tax = in_bracket * bracket.rate;
            tax += slice_tax;
            remaining -= in_bracket;
            slices.push(TaxSlice {
                bracket: index + 1,
                lower_bound: previous_bound,
                upper_bound: bracket.upper_bound,
                rate: bracket.rate,
                taxed_amount: in_bracket,
                tax: slice_tax,
            });
        }

        if let Some(bound) = bracket.upper_bound {
            previous_bound = bound;
        }
    }

    ProgressiveTaxResult { tax, slices }
}
