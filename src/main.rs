use anyhow::{Context, Result};
use clap::Parser;
use olsfit::{Samples, config::Config, evaluate};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// CSV file the line is fitted on.
    train_file: PathBuf,

    /// CSV file the fitted line is scored on.
    test_file: PathBuf,

    /// Column holding the x values [default: size].
    x_key: Option<String>,

    /// Column holding the y values [default: weight].
    y_key: Option<String>,

    /// TOML file with column names and input options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of the bare RMSE.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::debug!("{args:?}");

    let mut cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };
    cfg.override_columns(args.x_key, args.y_key)
        .context("invalid column selection")?;
    log::debug!("{cfg:#?}");

    let train = Samples::from_csv(&args.train_file, &cfg.columns, cfg.delimiter())
        .context("failed to load training data")?;
    log::debug!("loaded {} training samples", train.len());

    let test = Samples::from_csv(&args.test_file, &cfg.columns, cfg.delimiter())
        .context("failed to load test data")?;
    log::debug!("loaded {} test samples", test.len());

    let eval = evaluate(&train, &test).context("failed to evaluate regression")?;

    if args.json {
        let report = serde_json::to_string_pretty(&eval.report())
            .context("failed to serialize report")?;
        println!("{report}");
    } else {
        println!("{}", eval.rmse);
    }

    Ok(())
}
