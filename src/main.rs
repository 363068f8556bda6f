// src/main.rs

use chocnobel::{csv_to_json, ConvertConfig};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) configure paths ──────────────────────────────────────────
    let cfg = ConvertConfig::from_env();
    info!(
        input = %cfg.input.display(),
        output = %cfg.output.display(),
        numeric = ?cfg.numeric_columns,
        "startup"
    );

    // ─── 3) convert ──────────────────────────────────────────────────
    match csv_to_json(&cfg) {
        Ok(summary) => info!(records = summary.records, "done"),
        Err(e) => {
            error!("converting CSV to JSON failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
