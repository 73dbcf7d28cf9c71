use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::format_value;

/// Render a valuation envelope as a summary table plus a schedule table,
/// or a bare cash-flow array as a schedule table alone.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_summary(result);
                if let Some(Value::Array(flows)) = result.get("cash_flows") {
                    println!();
                    print_schedule(flows);
                }
                print_trailer(map);
            } else {
                print_summary(value);
            }
        }
        Value::Array(arr) => print_schedule(arr),
        _ => println!("{}", value),
    }
}

/// Field/value table of the scalar result fields. The cash-flow schedule
/// gets its own row-per-period table below.
fn print_summary(result: &Value) {
    let Value::Object(map) = result else {
        println!("{}", result);
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if key == "cash_flows" {
            continue;
        }
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_schedule(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("{}", format_value(row));
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
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }

    println!("{}", Table::from(builder));
}

fn print_trailer(envelope: &serde_json::Map<String, Value>) {
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
