//! Relocation cost model: input record, derived result record, and the
//! validate-then-calculate pipeline invoked on every form change.

pub mod calculator;
pub mod validate;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::residency::{IndiaResidencyStatus, UaeResidencyStatus};
use crate::types::{Days, FieldBounds, Money, Rate};

pub use calculator::{calculate, evaluate, sensitivity_rows, REFERENCE_INCOMES};
pub use validate::{validate, DAYS_IN_YEAR, MIN_DAYS_IN_UAE};

/// Everything the calculator needs for one evaluation. Plain values, no
/// identity: the form rebuilds this record on every input change.
///
/// All INR amounts are in Indian rupees; `monthly_cost_uae` is in dirhams
/// and crosses into rupees through `exchange_rate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocationInput {
    /// Days per year spent in the UAE
    pub days_in_uae: Days,
    /// Days per year spent in India
    pub days_in_india: Days,
    /// Monthly cost of living in the UAE (AED)
    pub monthly_cost_uae: Money,
    /// Monthly cost of living in India (INR)
    pub monthly_cost_india: Money,
    /// AED→INR conversion factor
    pub exchange_rate: Rate,
    /// Annual flight spend (INR)
    pub flight_cost: Money,
    /// One-off relocation cost (INR)
    pub one_time_relocation_cost: Money,
    /// Effective Indian tax rate as a percentage (0–100)
    pub india_tax_rate_percent: Rate,
}

impl Default for RelocationInput {
    fn default() -> Self {
        RelocationInput {
            days_in_uae: 190,
            days_in_india: 110,
            monthly_cost_uae: dec!(10_000),
            monthly_cost_india: dec!(50_000),
            exchange_rate: dec!(23.9),
            flight_cost: dec!(30_000),
            one_time_relocation_cost: Decimal::ZERO,
            india_tax_rate_percent: dec!(31.2),
        }
    }
}

/// One row of the income sensitivity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    /// Reference annual income (INR)
    pub income: Money,
    /// Indian tax avoided at that income
    pub tax_saved: Money,
    /// Tax saved net of the incremental relocation cost
    pub net_gain: Money,
}

/// Derived result record. Recomputed from scratch on every call — no
/// mutation, no memoization, a pure function of [`RelocationInput`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocationOutput {
    /// 365 minus the days accounted for in either jurisdiction. Signed so
    /// an over-allocated (invalid) input still yields a number.
    pub days_abroad: i64,
    /// Annual UAE living cost in INR, flights included
    pub uae_total_cost: Money,
    /// India living cost avoided while in the UAE (prorated over UAE days
    /// only, not a full year)
    pub india_cost_avoided: Money,
    /// Net additional annual cost of the relocation (signed)
    pub incremental_cost: Money,
    /// Annual income at which Indian tax saved equals the incremental cost;
    /// 0 when the tax rate is 0
    pub breakeven_annual_income: Money,
    pub india_status: IndiaResidencyStatus,
    pub uae_status: UaeResidencyStatus,
    pub sensitivity: Vec<SensitivityRow>,
}

/// Min/max/step hints for the input widgets, keyed by field name. Purely
/// for rendering; the validator is the source of truth for acceptance.
pub fn input_bounds() -> BTreeMap<&'static str, FieldBounds> {
    let mut bounds = BTreeMap::new();
    bounds.insert(
        "days_in_uae",
        FieldBounds {
            min: Some(Decimal::from(MIN_DAYS_IN_UAE)),
            max: Some(Decimal::from(DAYS_IN_YEAR)),
            step: Some(dec!(1)),
        },
    );
    bounds.insert(
        "days_in_india",
        FieldBounds {
            min: Some(Decimal::ZERO),
            max: Some(Decimal::from(DAYS_IN_YEAR - MIN_DAYS_IN_UAE)),
            step: Some(dec!(1)),
        },
    );
    bounds.insert(
        "monthly_cost_uae",
        FieldBounds {
            min: Some(Decimal::ZERO),
            max: None,
            step: None,
        },
    );
    bounds.insert(
        "monthly_cost_india",
        FieldBounds {
            min: Some(Decimal::ZERO),
            max: None,
            step: None,
        },
    );
    bounds.insert(
        "exchange_rate",
        FieldBounds {
            min: Some(dec!(0.01)),
            max: None,
            step: Some(dec!(0.01)),
        },
    );
    bounds.insert(
        "flight_cost",
        FieldBounds {
            min: Some(Decimal::ZERO),
            max: None,
            step: Some(dec!(1000)),
        },
    );
    bounds.insert(
        "one_time_relocation_cost",
        FieldBounds {
            min: Some(Decimal::ZERO),
            max: None,
            step: Some(dec!(1000)),
        },
    );
    bounds.insert(
        "india_tax_rate_percent",
        FieldBounds {
            min: Some(Decimal::ZERO),
            max: Some(dec!(100)),
            step: Some(dec!(0.1)),
        },
    );
    bounds
}
