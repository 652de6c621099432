use serde_json::Value;
use std::io;

use super::display_value;

/// Write output as CSV to stdout. Objects become field,value rows with the
/// sensitivity table appended as its own header + rows section; arrays
/// become a plain header + rows table.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                if key == "sensitivity" {
                    continue;
                }
                let _ = wtr.write_record([key.as_str(), &display_value(key, val)]);
            }
            if let Some(Value::Array(rows)) = map.get("sensitivity") {
                let _ = wtr.flush();
                write_rows(&mut wtr, rows);
            }
        }
        Value::Array(rows) => write_rows(&mut wtr, rows),
        other => {
            let _ = wtr.write_record([&display_value("", other)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let _ = wtr.write_record(&headers);
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
            let _ = wtr.write_record(&record);
        }
    }
}
