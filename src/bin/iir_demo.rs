use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use spartan_filters::config::FilterConfig;
use spartan_filters::demo;
use spartan_filters::fixtures::InputSequence;
use spartan_filters::output::{OutputFormat, create_formatter};

#[derive(Parser, Debug)]
#[command(name = "iir_demo")]
#[command(about = "Run a fixed input sequence through the Transposed Direct-Form II IIR filter", long_about = None)]
struct Args {
    /// Input sequence: impulse, step, alternating
    #[arg(short = 'i', long, value_enum, default_value = "impulse")]
    input: InputSequence,

    /// TOML file with an [iir] table of b and a coefficients
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
    let mut filter = config.iir.build().context("Invalid IIR configuration")?;
    log::info!("IIR b: {:?}", filter.b());
    log::info!("IIR a: {:?}", filter.a());

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
