//! Input validation. One pass, no side effects, never throws: every
//! violation found is reported together so the form can flag all offending
//! widgets at once.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Days, ValidationReport};

use super::RelocationInput;

/// Calendar year length used throughout the model.
pub const DAYS_IN_YEAR: Days = 365;

/// UI-level floor on UAE days. Stricter than the 183-day TRC threshold so a
/// plan that validates still clears eligibility with margin.
pub const MIN_DAYS_IN_UAE: Days = 190;

/// Check every field against its range/sign constraint. An empty report
/// means the input is safe to calculate.
pub fn validate(input: &RelocationInput) -> ValidationReport {
    let mut report = ValidationReport::new();

    if input.monthly_cost_uae < Decimal::ZERO {
        report.add("monthly_cost_uae", "Cost must be non-negative.");
    }
    if input.monthly_cost_india < Decimal::ZERO {
        report.add("monthly_cost_india", "Cost must be non-negative.");
    }
    if input.exchange_rate <= Decimal::ZERO {
        report.add("exchange_rate", "Rate must be positive.");
    }
    if input.flight_cost < Decimal::ZERO {
        report.add("flight_cost", "Cost must be non-negative.");
    }
    if input.one_time_relocation_cost < Decimal::ZERO {
        report.add("one_time_relocation_cost", "Cost must be non-negative.");
    }
    if input.india_tax_rate_percent < Decimal::ZERO || input.india_tax_rate_percent > dec!(100) {
        report.add("india_tax_rate_percent", "Rate must be between 0 and 100.");
    }
    if input.days_in_uae < MIN_DAYS_IN_UAE || input.days_in_uae > DAYS_IN_YEAR {
        report.add(
            "days_in_uae",
            format!("Days must be between {MIN_DAYS_IN_UAE} and {DAYS_IN_YEAR}."),
        );
    }

    // Remaining days saturate at zero when days_in_uae is itself out of range
    let max_days_in_india = DAYS_IN_YEAR.saturating_sub(input.days_in_uae);
    if input.days_in_india > max_days_in_india {
        report.add(
            "days_in_india",
            format!("Days must be between 0 and {max_days_in_india}."),
        );
    }

    report
}
