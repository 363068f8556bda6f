// src/convert/mod.rs

pub mod write;

pub use write::{write_json_pretty, write_records};

use anyhow::{Context, Result};
use std::{fmt, fs, path::PathBuf, time::Instant};
use tracing::{debug, info};

use crate::config::ConvertConfig;
use crate::parse::{parse, trim_field};
use crate::record::{build_records, Record};

/// Document-level failures, reachable through `anyhow::Error::downcast_ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input is empty or whitespace only.
    EmptyDocument,
    /// The input parsed to zero rows.
    NoRows,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::EmptyDocument => write!(f, "CSV file is empty"),
            ConvertError::NoRows => write!(f, "no valid rows found in CSV"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Outcome of a successful [`csv_to_json`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

/// Parse CSV text and build one record per data row.
pub fn convert_text<S: AsRef<str>>(text: &str, numeric_columns: &[S]) -> Result<Vec<Record>> {
    if trim_field(text).is_empty() {
        return Err(ConvertError::EmptyDocument.into());
    }

    let rows = parse(text);
    if rows.is_empty() {
        return Err(ConvertError::NoRows.into());
    }
    debug!(rows = rows.len(), "parsed CSV");

    Ok(build_records(&rows, numeric_columns))
}

/// Read `cfg.input`, convert it and write the JSON array to `cfg.output`.
#[tracing::instrument(level = "info", skip(cfg), fields(input = %cfg.input.display()))]
pub fn csv_to_json(cfg: &ConvertConfig) -> Result<ConvertSummary> {
    let start = Instant::now();

    // 1) read the whole document
    let text = fs::read_to_string(&cfg.input)
        .with_context(|| format!("reading {}", cfg.input.display()))?;

    // 2) parse + build
    let records = convert_text(&text, cfg.numeric_columns.as_slice())
        .with_context(|| format!("converting {}", cfg.input.display()))?;

    // 3) write atomically
    write_records(&cfg.output, &records)
        .with_context(|| format!("writing {}", cfg.output.display()))?;

    info!(
        "converted {} → {}",
        cfg.input.display(),
        cfg.output.display()
    );
    info!(elapsed = ?start.elapsed(), "{} records", records.len());

    Ok(ConvertSummary {
        input: cfg.input.clone(),
        output: cfg.output.clone(),
        records: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DEFAULT_NUMERIC_COLUMNS;
    use serde_json::json;

    #[test]
    fn empty_and_blank_documents_are_rejected() {
        for text in ["", "  \n\t\n"] {
            let err = convert_text(text, DEFAULT_NUMERIC_COLUMNS).unwrap_err();
            assert_eq!(
                err.downcast_ref::<ConvertError>(),
                Some(&ConvertError::EmptyDocument)
            );
        }
    }

    #[test]
    fn byte_order_mark_only_document_is_empty() {
        let err = convert_text("\u{feff}\n", DEFAULT_NUMERIC_COLUMNS).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConvertError>(),
            Some(&ConvertError::EmptyDocument)
        );
    }

    #[test]
    fn byte_order_mark_does_not_hide_numeric_header() -> Result<()> {
        let text = "\u{feff}Consumption,Nobel,Country\n10,3,Switzerland\n";
        let records = convert_text(text, DEFAULT_NUMERIC_COLUMNS)?;
        assert_eq!(
            serde_json::Value::Object(records[0].clone()),
            json!({"Consumption": 10, "Nobel": 3, "Country": "Switzerland"})
        );
        Ok(())
    }

    #[test]
    fn document_of_blank_rows_has_no_rows() {
        let err = convert_text(",,\n , \n", DEFAULT_NUMERIC_COLUMNS).unwrap_err();
        assert_eq!(err.downcast_ref::<ConvertError>(), Some(&ConvertError::NoRows));
        assert_eq!(err.to_string(), "no valid rows found in CSV");
    }

    #[test]
    fn header_only_document_converts_to_nothing() -> Result<()> {
        assert!(convert_text("Country,Consumption,Nobel\n", DEFAULT_NUMERIC_COLUMNS)?.is_empty());
        Ok(())
    }

    #[test]
    fn converts_quoted_country_names() -> Result<()> {
        let text = "Country,Consumption,Nobel\n\"Korea, South\",1.2,\"1\"\n";
        let records = convert_text(text, DEFAULT_NUMERIC_COLUMNS)?;
        assert_eq!(
            serde_json::Value::Object(records[0].clone()),
            json!({"Country": "Korea, South", "Consumption": 1.2, "Nobel": 1})
        );
        Ok(())
    }
}
