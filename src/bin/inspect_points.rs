use chocnobel::chart::{load_records, scatter_points};
use chocnobel::ChartConfig;
use std::{env, path::Path, process::exit};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // Expect exactly one CLI argument: path to the generated JSON file.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <DATA_JSON>", program_name(&args));
        exit(1);
    }
    if let Err(e) = inspect_points(Path::new(&args[1])) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

/// argv[0], or a fixed name when the process was started without one.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("inspect_points", String::as_str)
}

/// Load the records, map them to scatter points and print them with a summary.
fn inspect_points(path: &Path) -> anyhow::Result<()> {
    let records = load_records(path)?;
    let data = scatter_points(&records, &ChartConfig::default());

    println!("=== Points: {} ===", path.display());
    for p in &data.points {
        println!("- {:<30} | x: {:>8.2} | y: {:>8.2}", p.country, p.x, p.y);
    }
    println!();

    println!("Records:  {}", records.len());
    println!("Plotted:  {}", data.points.len());
    println!("Skipped:  {}", data.skipped);
    if let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (data.x_range(), data.y_range()) {
        println!("x range:  {:.2} .. {:.2}", x_lo, x_hi);
        println!("y range:  {:.2} .. {:.2}", y_lo, y_hi);
    }

    Ok(())
}
