// Standalone CLI entry point
//
// Ingests one equipment CSV through the boundary operations, prints the
// summary JSON, and optionally writes the rendered report to a file. The
// HTTP transport and any graphical client sit outside this repository;
// this binary is the minimal driver over the same boundary.

use anyhow::{bail, Context, Result};
use csv2report_history::HistoryStore;
use std::path::PathBuf;
use tracing::info;

struct Args {
    csv_path: PathBuf,
    name: Option<String>,
    report_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => csv2report_config::load_from_file_path(path)?,
        None => csv2report_config::load_or_default()?,
    };
    init_tracing(&config.log.level);

    let store = HistoryStore::new(config.history.max_entries);

    let csv_bytes = std::fs::read(&args.csv_path)
        .with_context(|| format!("Failed to read {}", args.csv_path.display()))?;
    let name = args.name.clone().or_else(|| {
        args.csv_path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
    });

    let response =
        match csv2report_handlers::ingest_csv(&store, &config, &csv_bytes, name.as_deref()) {
            Ok(response) => response,
            Err(err) => match err.hint() {
                Some(hint) => bail!("{} ({})", err.message(), hint),
                None => bail!("{}", err.message()),
            },
        };

    println!("{}", serde_json::to_string_pretty(&response.summary)?);

    if let Some(out_path) = &args.report_path {
        let document = csv2report_handlers::report(&store, &response.dataset_id)
            .map_err(|e| anyhow::anyhow!("{}", e.message()))?;
        std::fs::write(out_path, &document.bytes)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        info!(
            path = %out_path.display(),
            suggested_filename = %document.filename,
            "wrote report"
        );
    }

    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut csv_path = None;
    let mut name = None;
    let mut report_path = None;
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--name" => name = Some(args.next().context("--name requires a value")?),
            "--report" => {
                report_path = Some(PathBuf::from(
                    args.next().context("--report requires a value")?,
                ))
            }
            "--config" => {
                config_path = Some(PathBuf::from(
                    args.next().context("--config requires a value")?,
                ))
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if csv_path.is_none() && !other.starts_with('-') => {
                csv_path = Some(PathBuf::from(other));
            }
            other => bail!("Unrecognized argument: {}", other),
        }
    }

    let Some(csv_path) = csv_path else {
        print_usage();
        bail!("Missing CSV file argument");
    };

    Ok(Args {
        csv_path,
        name,
        report_path,
        config_path,
    })
}

fn print_usage() {
    eprintln!("Usage: csv2report <file.csv> [--name <display name>] [--report <out path>] [--config <config.toml>]");
}

fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
