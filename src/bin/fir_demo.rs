use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use spartan_filters::config::FilterConfig;
use spartan_filters::demo;
use spartan_filters::fixtures::InputSequence;
use spartan_filters::output::{OutputFormat, create_formatter};

#[derive(Parser, Debug)]
#[command(name = "fir_demo")]
#[command(about = "Run a fixed input sequence through the FIR filter", long_about = None)]
struct Args {
    /// Input sequence: impulse, step, alternating
    #[arg(short = 'i', long, value_enum, default_value = "impulse")]
    input: InputSequence,

    /// TOML file with a [fir] coefficients table
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &args.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    let mut filter = config.fir.build().context("Invalid FIR configuration")?;
    log::info!("FIR coefficients: {:?}", filter.coefficients());

    let formatter = create_formatter(args.format);
    let stdout = std::io::stdout();
    demo::run(
        &mut filter,
        args.input.samples(),
        formatter.as_ref(),
        &mut stdout.lock(),
    )?;

    Ok(())
}
