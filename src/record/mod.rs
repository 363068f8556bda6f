// src/record/mod.rs

pub mod coerce;

pub use coerce::{coerce_numeric, leading_float};

use serde_json::{Map, Value};
use tracing::debug;

/// One data row keyed by header name, in header order.
pub type Record = Map<String, Value>;

/// Columns coerced to numbers when no override is configured.
pub const DEFAULT_NUMERIC_COLUMNS: &[&str] = &["Consumption", "Nobel"];

/// Zip the header row (`rows[0]`) against every following row.
///
/// - a missing trailing field becomes `""`
/// - fields beyond the header count are dropped
/// - a repeated header keeps its first position and takes the later value
/// - headers listed in `numeric_columns` go through [`coerce_numeric`]
pub fn build_records<S: AsRef<str>>(rows: &[Vec<String>], numeric_columns: &[S]) -> Vec<Record> {
    let Some((headers, data)) = rows.split_first() else {
        return Vec::new();
    };

    let numeric: Vec<bool> = headers
        .iter()
        .map(|h| numeric_columns.iter().any(|c| c.as_ref() == h))
        .collect();

    let records: Vec<Record> = data
        .iter()
        .map(|row| {
            let mut record = Map::with_capacity(headers.len());
            for (j, header) in headers.iter().enumerate() {
                let raw = row.get(j).map(String::as_str).unwrap_or("");
                let value = if numeric[j] {
                    coerce_numeric(raw)
                } else {
                    Value::String(raw.to_string())
                };
                record.insert(header.clone(), value);
            }
            record
        })
        .collect();

    debug!(
        columns = headers.len(),
        records = records.len(),
        "built records"
    );
    records
}
