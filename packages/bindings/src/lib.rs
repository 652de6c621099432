use std::str::FromStr;

use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Serialize;

use residency_calc_core::relocation::{
    self, sensitivity_rows, RelocationInput, RelocationOutput, REFERENCE_INCOMES,
};
use residency_calc_core::residency::{classify_india_residency, classify_uae_residency};
use residency_calc_core::types::ValidationReport;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// What the form surface consumes on every input change: the field-keyed
/// error map plus the result, which is suppressed whenever any error exists.
#[derive(Serialize)]
struct Evaluation {
    errors: ValidationReport,
    result: Option<RelocationOutput>,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_relocation(input_json: String) -> NapiResult<String> {
    let input: RelocationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;

    let errors = relocation::validate(&input);
    let result = if errors.is_valid() {
        Some(relocation::calculate(&input))
    } else {
        None
    };

    serde_json::to_string(&Evaluation { errors, result }).map_err(to_napi_error)
}

#[napi]
pub fn validate_relocation(input_json: String) -> NapiResult<String> {
    let input: RelocationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    serde_json::to_string(&relocation::validate(&input)).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Residency classification
// ---------------------------------------------------------------------------

#[napi]
pub fn india_residency_status(days_in_india: u32) -> String {
    classify_india_residency(days_in_india).to_string()
}

#[napi]
pub fn uae_residency_status(days_in_uae: u32) -> String {
    classify_uae_residency(days_in_uae).to_string()
}

// ---------------------------------------------------------------------------
// Form support
// ---------------------------------------------------------------------------

#[napi]
pub fn relocation_input_defaults() -> NapiResult<String> {
    serde_json::to_string(&RelocationInput::default()).map_err(to_napi_error)
}

#[napi]
pub fn relocation_input_bounds() -> NapiResult<String> {
    serde_json::to_string(&relocation::input_bounds()).map_err(to_napi_error)
}

#[napi]
pub fn sensitivity_table(incremental_cost: String, tax_rate_percent: String) -> NapiResult<String> {
    let incremental_cost =
        Decimal::from_str(incremental_cost.trim()).map_err(to_napi_error)?;
    let tax_rate_percent = Decimal::from_str(tax_rate_percent.trim()).map_err(to_napi_error)?;
    let rows = sensitivity_rows(incremental_cost, tax_rate_percent, &REFERENCE_INCOMES);
    serde_json::to_string(&rows).map_err(to_napi_error)
}
