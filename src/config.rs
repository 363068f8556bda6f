// src/config.rs

use std::{env, path::PathBuf};

use crate::record::DEFAULT_NUMERIC_COLUMNS;

/// Env var holding a comma-separated override of the numeric columns.
pub const NUMERIC_COLUMNS_ENV: &str = "CHOCNOBEL_NUMERIC_COLUMNS";

/// Env var pointing at the submissions JSON file.
pub const SUBMISSIONS_PATH_ENV: &str = "CHOCNOBEL_SUBMISSIONS";

/// Submissions file from [`SUBMISSIONS_PATH_ENV`], default `submissions.json`.
pub fn submissions_path(env_value: Option<&str>) -> PathBuf {
    match env_value.map(str::trim) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from("submissions.json"),
    }
}

/// Paths and column settings for one CSV → JSON conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub numeric_columns: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data.csv"),
            output: PathBuf::from("data.json"),
            numeric_columns: DEFAULT_NUMERIC_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl ConvertConfig {
    /// Build from positional `[INPUT] [OUTPUT]` args (program name already
    /// stripped) and an optional numeric-column override.
    pub fn from_parts<I>(args: I, numeric_override: Option<&str>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter();
        if let Some(input) = args.next() {
            cfg.input = PathBuf::from(input);
        }
        if let Some(output) = args.next() {
            cfg.output = PathBuf::from(output);
        }
        if let Some(list) = numeric_override {
            cfg.numeric_columns = split_columns(list);
        }
        cfg
    }

    /// Read the process args and [`NUMERIC_COLUMNS_ENV`].
    pub fn from_env() -> Self {
        let numeric = env::var(NUMERIC_COLUMNS_ENV).ok();
        Self::from_parts(env::args().skip(1), numeric.as_deref())
    }
}

fn split_columns(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Which record columns feed a scatter point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub x_column: String,
    pub y_column: String,
    pub label_column: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_column: "Consumption".into(),
            y_column: "Nobel".into(),
            label_column: "Country".into(),
        }
    }
}
