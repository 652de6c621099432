//! The calculation core: daily cost proration, incremental cost, breakeven
//! income, residency classification, and the income sensitivity table.
//!
//! `calculate` assumes validated input and never fails — invalid input still
//! produces numeric output, validity is solely the validator's concern. The
//! two are combined by [`evaluate`], the pipeline callers are expected to use.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ResidencyError;
use crate::residency::{classify_india_residency, classify_uae_residency};
use crate::types::{Money, Rate};
use crate::ResidencyResult;

use super::validate::{validate, DAYS_IN_YEAR};
use super::{RelocationInput, RelocationOutput, SensitivityRow};

/// Fixed reference annual incomes (INR) for the sensitivity table:
/// 50L, 1Cr, 1.5Cr, 2Cr, 3Cr, 5Cr, 10Cr.
pub const REFERENCE_INCOMES: [Money; 7] = [
    dec!(5_000_000),
    dec!(10_000_000),
    dec!(15_000_000),
    dec!(20_000_000),
    dec!(30_000_000),
    dec!(50_000_000),
    dec!(100_000_000),
];

const MONTHS_IN_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Monthly cost spread over the 365/12-day average month.
fn daily_rate(monthly_cost: Money) -> Money {
    monthly_cost * MONTHS_IN_YEAR / Decimal::from(DAYS_IN_YEAR)
}

/// Build the tax-saved / net-gain table for a list of reference incomes.
pub fn sensitivity_rows(
    incremental_cost: Money,
    tax_rate_percent: Rate,
    incomes: &[Money],
) -> Vec<SensitivityRow> {
    let rate = tax_rate_percent / PERCENT;
    incomes
        .iter()
        .map(|&income| {
            let tax_saved = income * rate;
            SensitivityRow {
                income,
                tax_saved,
                net_gain: tax_saved - incremental_cost,
            }
        })
        .collect()
}

/// Compute the full result record from an input record. Pure and
/// deterministic: identical inputs always yield identical outputs.
pub fn calculate(input: &RelocationInput) -> RelocationOutput {
    let days_in_uae = Decimal::from(input.days_in_uae);

    let days_abroad =
        i64::from(DAYS_IN_YEAR) - i64::from(input.days_in_uae) - i64::from(input.days_in_india);

    let uae_total_cost =
        daily_rate(input.monthly_cost_uae) * days_in_uae * input.exchange_rate + input.flight_cost;

    // India costs stop accruing only for the days actually spent in the UAE
    let india_cost_avoided = daily_rate(input.monthly_cost_india) * days_in_uae;

    let incremental_cost =
        uae_total_cost - india_cost_avoided + input.one_time_relocation_cost;

    let tax_rate = input.india_tax_rate_percent / PERCENT;
    let breakeven_annual_income = if tax_rate > Decimal::ZERO {
        incremental_cost / tax_rate
    } else {
        Decimal::ZERO
    };

    RelocationOutput {
        days_abroad,
        uae_total_cost,
        india_cost_avoided,
        incremental_cost,
        breakeven_annual_income,
        india_status: classify_india_residency(input.days_in_india),
        uae_status: classify_uae_residency(input.days_in_uae),
        sensitivity: sensitivity_rows(
            incremental_cost,
            input.india_tax_rate_percent,
            &REFERENCE_INCOMES,
        ),
    }
}

/// Validate-then-calculate pipeline. A non-empty report suppresses the
/// result entirely, per the consuming surface's policy.
pub fn evaluate(input: &RelocationInput) -> ResidencyResult<RelocationOutput> {
    let report = validate(input);
    if !report.is_valid() {
        return Err(ResidencyError::Validation(report));
    }
    Ok(calculate(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::residency::{IndiaResidencyStatus, UaeResidencyStatus};
    use rust_decimal_macros::dec;

    fn base_input() -> RelocationInput {
        RelocationInput {
            days_in_uae: 190,
            days_in_india: 110,
            monthly_cost_uae: dec!(25_000),
            monthly_cost_india: dec!(50_000),
            exchange_rate: dec!(23.9),
            flight_cost: dec!(61_400),
            one_time_relocation_cost: dec!(0),
            india_tax_rate_percent: dec!(31.2),
        }
    }

    #[test]
    fn test_days_abroad_conservation() {
        let out = calculate(&base_input());
        assert_eq!(out.days_abroad, 65);
    }

    #[test]
    fn test_worked_example_statuses() {
        let out = calculate(&base_input());
        assert_eq!(out.india_status, IndiaResidencyStatus::NonResident);
        assert_eq!(out.uae_status, UaeResidencyStatus::TrcEligible);
    }

    #[test]
    fn test_uae_total_cost_formula() {
        let out = calculate(&base_input());
        let expected =
            dec!(25_000) * dec!(12) / dec!(365) * dec!(190) * dec!(23.9) + dec!(61_400);
        assert_eq!(out.uae_total_cost, expected);
    }

    #[test]
    fn test_avoided_cost_prorated_over_uae_days() {
        let out = calculate(&base_input());
        let expected = dec!(50_000) * dec!(12) / dec!(365) * dec!(190);
        assert_eq!(out.india_cost_avoided, expected);
    }

    #[test]
    fn test_incremental_cost_identity() {
        let input = base_input();
        let out = calculate(&input);
        assert_eq!(
            out.incremental_cost,
            out.uae_total_cost - out.india_cost_avoided + input.one_time_relocation_cost
        );
    }

    #[test]
    fn test_one_time_cost_flows_through() {
        let mut input = base_input();
        input.one_time_relocation_cost = dec!(250_000);
        let with = calculate(&input);
        input.one_time_relocation_cost = dec!(0);
        let without = calculate(&input);
        assert_eq!(with.incremental_cost, without.incremental_cost + dec!(250_000));
    }

    #[test]
    fn test_breakeven_is_cost_over_rate() {
        let out = calculate(&base_input());
        assert_eq!(
            out.breakeven_annual_income,
            out.incremental_cost / dec!(0.312)
        );
    }

    #[test]
    fn test_zero_tax_rate_breakeven_is_zero() {
        let mut input = base_input();
        input.india_tax_rate_percent = dec!(0);
        let out = calculate(&input);
        assert_eq!(out.breakeven_annual_income, dec!(0));
    }

    #[test]
    fn test_sensitivity_uses_reference_incomes_in_order() {
        let out = calculate(&base_input());
        assert_eq!(out.sensitivity.len(), REFERENCE_INCOMES.len());
        for (row, income) in out.sensitivity.iter().zip(REFERENCE_INCOMES) {
            assert_eq!(row.income, income);
        }
    }

    #[test]
    fn test_sensitivity_row_at_one_crore() {
        let out = calculate(&base_input());
        let row = out
            .sensitivity
            .iter()
            .find(|r| r.income == dec!(10_000_000))
            .unwrap();
        assert_eq!(row.tax_saved, dec!(3_120_000.0));
        assert_eq!(row.net_gain, row.tax_saved - out.incremental_cost);
    }

    #[test]
    fn test_sensitivity_rows_standalone() {
        let rows = sensitivity_rows(dec!(1_000_000), dec!(30), &[dec!(5_000_000)]);
        assert_eq!(rows[0].tax_saved, dec!(1_500_000.0));
        assert_eq!(rows[0].net_gain, dec!(500_000.0));
    }

    #[test]
    fn test_deterministic_repeat_calls() {
        let input = base_input();
        let a = calculate(&input);
        let b = calculate(&input);
        assert_eq!(a.incremental_cost, b.incremental_cost);
        assert_eq!(a.breakeven_annual_income, b.breakeven_annual_income);
        assert_eq!(a.sensitivity, b.sensitivity);
    }

    #[test]
    fn test_invalid_input_still_yields_numbers() {
        // Calculator does not enforce validity; over-allocated days just go
        // negative instead of panicking.
        let mut input = base_input();
        input.days_in_uae = 300;
        input.days_in_india = 300;
        let out = calculate(&input);
        assert_eq!(out.days_abroad, -235);
        assert_eq!(out.india_status, IndiaResidencyStatus::Resident);
    }

    #[test]
    fn test_evaluate_suppresses_result_on_invalid_input() {
        let mut input = base_input();
        input.exchange_rate = dec!(0);
        match evaluate(&input) {
            Err(ResidencyError::Validation(report)) => {
                assert!(report.message("exchange_rate").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_passes_valid_input_through() {
        let input = base_input();
        let out = evaluate(&input).unwrap();
        assert_eq!(out.incremental_cost, calculate(&input).incremental_cost);
    }
}
