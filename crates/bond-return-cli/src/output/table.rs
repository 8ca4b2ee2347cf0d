use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::display_value;

/// Format the computation envelope as a table: the result figures first,
/// then any warnings and the methodology line.
pub fn print_table(value: &Value) {
    let envelope = match value.as_object() {
        Some(map) => map,
        None => {
            println!("{}", value);
            return;
        }
    };

    let fields = envelope
        .get("result")
        .and_then(Value::as_object)
        .unwrap_or(envelope);

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in fields {
        builder.push_record([key.as_str(), &display_value(val)]);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}
