use serde_json::Value;

use super::display_value;

/// Print just the headline answer from the output.
///
/// Heuristic: the breakeven income is what most evaluations are after, then
/// the incremental cost, then the residency labels; fall back to the first
/// field otherwise.
pub fn print_minimal(value: &Value) {
    let priority_keys = [
        "breakeven_annual_income",
        "incremental_cost",
        "india_status_label",
        "india_status",
    ];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", display_value(key, val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, display_value(key, val));
            return;
        }
    }

    println!("{}", display_value("", value));
}
