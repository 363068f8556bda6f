use anyhow::{bail, Context, Result};
use chocnobel::config::{submissions_path, SUBMISSIONS_PATH_ENV};
use chocnobel::submission::RECENT_LIMIT;
use chocnobel::{submit, JsonFileStore, SubmissionStore};
use std::{env, process::exit};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map_or("submissions", String::as_str);
    if args.len() < 2 {
        eprintln!("Usage: {} add <EXPLANATION...> | recent [LIMIT]", prog);
        exit(1);
    }

    if let Err(e) = run(&args[1], &args[2..]) {
        error!("{:#}", e);
        exit(1);
    }
}

fn run(command: &str, rest: &[String]) -> Result<()> {
    let path = submissions_path(env::var(SUBMISSIONS_PATH_ENV).ok().as_deref());
    let store = JsonFileStore::open(&path)?;

    match command {
        "add" => {
            let saved = submit(&store, &rest.join(" "))?;
            println!("✅ stored #{} in {}", saved.id, store.path().display());
        }
        "recent" => {
            let limit = match rest.first() {
                Some(n) => n.parse().with_context(|| format!("invalid limit {:?}", n))?,
                None => RECENT_LIMIT,
            };
            let recent = store.recent(limit)?;
            println!("=== {} most recent explanations ===", recent.len());
            for s in recent {
                println!("- [{}] #{}: {}", s.timestamp.format("%Y-%m-%d %H:%M:%S"), s.id, s.explanation);
            }
        }
        other => bail!("unknown command {:?}", other),
    }
    Ok(())
}
