// src/chart.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fs, path::Path};
use tracing::warn;

use crate::config::ChartConfig;
use crate::record::Record;

/// A single point on the consumption-vs-laureates scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub country: String,
}

/// Plot-ready points plus the number of records that could not be plotted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub points: Vec<ScatterPoint>,
    pub skipped: usize,
}

impl ChartData {
    /// `(min, max)` over x, or `None` without points.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        range(self.points.iter().map(|p| p.x))
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        range(self.points.iter().map(|p| p.y))
    }
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Read a JSON array of record objects, as written by the converter.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Map records onto scatter points; records without numeric x and y are skipped.
pub fn scatter_points(records: &[Record], cfg: &ChartConfig) -> ChartData {
    let mut data = ChartData::default();

    for (idx, record) in records.iter().enumerate() {
        let x = record.get(&cfg.x_column).and_then(Value::as_f64);
        let y = record.get(&cfg.y_column).and_then(Value::as_f64);
        match (x, y) {
            (Some(x), Some(y)) => data.points.push(ScatterPoint {
                x,
                y,
                country: label(record.get(&cfg.label_column)),
            }),
            _ => {
                warn!(
                    record = idx,
                    x_column = %cfg.x_column,
                    y_column = %cfg.y_column,
                    "skipping record without numeric coordinates"
                );
                data.skipped += 1;
            }
        }
    }

    data
}

fn label(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
