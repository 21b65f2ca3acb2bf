//! Audit trace construction.
//!
//! Explains a finished [`SalaryBreakdown`] step by step. Kept apart from
//! [`compute_salary`](super::compute_salary) so the calculator stays a plain
//! function and only callers that render an explanation pay for building one.

use rust_decimal::Decimal;
use serde_json::json;

use crate::config::RateTable;
use crate::models::{AuditStep, AuditWarning, Employee, InsuranceBasis, SalaryBreakdown};

use super::insurance_bases::{primary_insurance_cap, unemployment_insurance_cap};

fn amount(value: Decimal) -> String {
    value.normalize().to_string()
}

fn step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output,
        reasoning,
    }
}

/// Builds the ordered audit steps for a breakdown.
///
/// Steps: insurance bases, employee insurance, employer cost, taxable
/// income, progressive tax, net pay.
pub fn build_audit_steps(
    employee: &Employee,
    rates: &RateTable,
    breakdown: &SalaryBreakdown,
) -> Vec<AuditStep> {
    let bases = &breakdown.insurance_bases;
    let primary_cap = primary_insurance_cap(rates);
    let unemployment_cap = unemployment_insurance_cap(rates, employee.region);
    let basis_source = match employee.insurance_basis {
        InsuranceBasis::UseGross => "gross_salary",
        InsuranceBasis::Custom(_) => "custom",
    };

    let ee = &breakdown.employee_insurance;
    let er = &breakdown.employer_contributions;
    let deductions = &breakdown.deductions;

    let slices: Vec<serde_json::Value> = breakdown
        .tax_slices
        .iter()
        .map(|slice| {
            json!({
                "bracket": slice.bracket,
                "lower_bound": amount(slice.lower_bound),
                "upper_bound": slice.upper_bound.map(amount),
                "rate": amount(slice.rate),
                "taxed_amount": amount(slice.taxed_amount),
                "tax": amount(slice.tax)
            })
        })
        .collect();
    let tax_reasoning = if breakdown.tax_slices.is_empty() {
        "No taxable income, no tax due".to_string()
    } else {
        breakdown
            .tax_slices
            .iter()
            .map(|s| format!("{} x {}", amount(s.taxed_amount), amount(s.rate)))
            .collect::<Vec<_>>()
            .join(" + ")
            + &format!(" = {}", amount(breakdown.tax))
    };

    vec![
        step(
            1,
            "insurance_bases",
            "Insurance Bases",
            json!({
                "basis_source": basis_source,
                "basis": amount(bases.basis),
                "region": employee.region.ordinal(),
                "primary_cap": amount(primary_cap),
                "unemployment_cap": amount(unemployment_cap)
            }),
            json!({
                "primary_base": amount(bases.primary),
                "unemployment_base": amount(bases.unemployment)
            }),
            format!(
                "min({}, {}) = {} for retirement/health; min({}, {}) = {} for unemployment",
                amount(bases.basis),
                amount(primary_cap),
                amount(bases.primary),
                amount(bases.basis),
                amount(unemployment_cap),
                amount(bases.unemployment)
            ),
        ),
        step(
            2,
            "employee_insurance",
            "Employee Insurance",
            json!({
                "primary_base": amount(bases.primary),
                "unemployment_base": amount(bases.unemployment),
                "retirement_rate": amount(rates.employee_rates.retirement),
                "health_rate": amount(rates.employee_rates.health),
                "unemployment_rate": amount(rates.employee_rates.unemployment)
            }),
            json!({
                "retirement": amount(ee.retirement),
                "health": amount(ee.health),
                "unemployment": amount(ee.unemployment),
                "total": amount(ee.total)
            }),
            format!(
                "{} + {} + {} = {}",
                amount(ee.retirement),
                amount(ee.health),
                amount(ee.unemployment),
                amount(ee.total)
            ),
        ),
        step(
            3,
            "employer_cost",
            "Employer Cost",
            json!({
                "gross": amount(breakdown.gross),
                "primary_base": amount(bases.primary),
                "unemployment_base": amount(bases.unemployment),
                "levy_base": amount(bases.basis)
            }),
            json!({
                "retirement": amount(er.retirement),
                "health": amount(er.health),
                "unemployment": amount(er.unemployment),
                "union_levy": amount(er.union_levy),
                "employer_cost": amount(breakdown.employer_cost)
            }),
            format!(
                "{} gross + {} contributions = {}",
                amount(breakdown.gross),
                amount(er.total),
                amount(breakdown.employer_cost)
            ),
        ),
        step(
            4,
            "taxable_income",
            "Taxable Income",
            json!({
                "pre_tax_income": amount(breakdown.pre_tax_income),
                "personal_deduction": amount(deductions.personal),
                "dependents": employee.dependents,
                "dependent_deduction": amount(deductions.dependents)
            }),
            json!({
                "total_deductions": amount(deductions.total),
                "taxable_income": amount(breakdown.taxable_income)
            }),
            format!(
                "max(0, {} - {}) = {}",
                amount(breakdown.pre_tax_income),
                amount(deductions.total),
                amount(breakdown.taxable_income)
            ),
        ),
        step(
            5,
            "progressive_tax",
            "Progressive Income Tax",
            json!({ "taxable_income": amount(breakdown.taxable_income) }),
            json!({ "slices": slices, "tax": amount(breakdown.tax) }),
            tax_reasoning,
        ),
        step(
            6,
            "net_pay",
            "Net Pay",
            json!({
                "gross": amount(breakdown.gross),
                "employee_insurance": amount(ee.total),
                "tax": amount(breakdown.tax)
            }),
            json!({ "net": amount(breakdown.net) }),
            format!(
                "{} - {} - {} = {}",
                amount(breakdown.gross),
                amount(ee.total),
                amount(breakdown.tax),
                amount(breakdown.net)
            ),
        ),
    ]
}

/// Flags legal inputs that are worth a second look.
pub fn collect_warnings(
    employee: &Employee,
    rates: &RateTable,
    breakdown: &SalaryBreakdown,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();
    let bases = &breakdown.insurance_bases;

    if let InsuranceBasis::Custom(custom) = employee.insurance_basis {
        if custom < employee.gross_salary {
            warnings.push(AuditWarning {
                code: "CUSTOM_BASIS_BELOW_GROSS".to_string(),
                message: format!(
                    "Declared insurance basis {} is below gross salary {}",
                    amount(custom),
                    amount(employee.gross_salary)
                ),
                severity: "medium".to_string(),
            });
        } else if custom > employee.gross_salary {
            warnings.push(AuditWarning {
                code: "CUSTOM_BASIS_ABOVE_GROSS".to_string(),
                message: format!(
                    "Declared insurance basis {} is above gross salary {}",
                    amount(custom),
                    amount(employee.gross_salary)
                ),
                severity: "low".to_string(),
            });
        }
    }

    if bases.primary < bases.basis {
        warnings.push(AuditWarning {
            code: "PRIMARY_BASE_CAPPED".to_string(),
            message: format!(
                "Retirement and health base capped at {}",
                amount(primary_insurance_cap(rates))
            ),
            severity: "low".to_string(),
        });
    }

    if bases.unemployment < bases.basis {
        warnings.push(AuditWarning {
            code: "UNEMPLOYMENT_BASE_CAPPED".to_string(),
            message: format!(
                "Unemployment base capped at {} for region {}",
                amount(unemployment_insurance_cap(rates, employee.region)),
                employee.region.ordinal()
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
