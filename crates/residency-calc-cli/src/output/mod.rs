pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Output fields holding INR amounts, rendered with Indian grouping in the
/// human-facing formats (table, csv). JSON keeps raw decimal strings.
const MONEY_FIELDS: [&str; 8] = [
    "uae_total_cost",
    "india_cost_avoided",
    "incremental_cost",
    "breakeven_annual_income",
    "income",
    "tax_saved",
    "net_gain",
    "one_time_relocation_cost",
];

/// Render a single JSON value for display, applying the INR convention to
/// known money fields. Decimals arrive as strings because the core
/// serializes them with `serde-with-str`.
pub fn display_value(field: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&field) {
        if let Some(amount) = value.as_str().and_then(|s| Decimal::from_str(s).ok()) {
            return residency_calc_core::format::format_inr(amount);
        }
    }

    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
