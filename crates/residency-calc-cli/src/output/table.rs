use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::display_value;

/// Format output as tables. Result objects render as a Field/Value table
/// with any sensitivity rows in a second table underneath; plain arrays
/// (e.g. a standalone sensitivity run) render as row tables directly.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(_) => {
            print_object_table(value);
            if let Some(Value::Array(rows)) = value.get("sensitivity") {
                println!("\nSensitivity (annual income vs net gain):");
                print_rows_table(rows);
            }
        }
        Value::Array(rows) => print_rows_table(rows),
        _ => println!("{}", value),
    }
}

fn print_object_table(value: &Value) {
    let Value::Object(map) = value else { return };

    if map.is_empty() {
        // An empty validation report means the input is clean
        println!("(no validation errors)");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if key == "sensitivity" {
            continue;
        }
        builder.push_record([key.as_str(), &display_value(key, val)]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn print_rows_table(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("{}", display_value("", row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| {
                    map.get(h.as_str())
                        .map(|v| display_value(h, v))
                        .unwrap_or_default()
                })
                .collect();
            builder.push_record(record);
        }
    }
    let table = Table::from(builder);
    println!("{}", table);
}
