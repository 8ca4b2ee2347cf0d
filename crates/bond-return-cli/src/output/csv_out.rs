use serde_json::Value;
use std::io;

use super::display_value;

/// Write the result figures as two-column CSV (field, value) to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let fields = value
        .as_object()
        .map(|map| map.get("result").and_then(Value::as_object).unwrap_or(map));

    match fields {
        Some(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &display_value(val)]);
            }
        }
        None => {
            let _ = wtr.write_record([&display_value(value)]);
        }
    }

    let _ = wtr.flush();
}
