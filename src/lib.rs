//! Build-time tooling for the chocolate-vs-Nobel survey page.
//!
//! [`parse::parse`] turns CSV text into rows, [`record::build_records`] zips
//! them against the header row, and [`convert::csv_to_json`] ties both to the
//! files the chart page loads. [`chart`] reads the generated JSON back as
//! scatter points. [`submission`] validates and stores the visitors'
//! explanations shown on the results page.

pub mod chart;
pub mod config;
pub mod convert;
pub mod parse;
pub mod record;
pub mod submission;

pub use config::{ChartConfig, ConvertConfig};
pub use convert::{csv_to_json, ConvertError, ConvertSummary};
pub use parse::parse;
pub use record::{build_records, Record};
pub use submission::{submit, JsonFileStore, Submission, SubmissionError, SubmissionStore};
