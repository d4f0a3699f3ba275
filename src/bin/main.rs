mod common;
use std::env::{set_var, var};
use std::error::Error;
use std::path::Path;

use chrono::prelude::*;
use clap::Parser;

use common::config::builder::ConfigContainer;
use common::helpers::{parse_run_date, FundError};
use common::io::outputs::OutputTransport;
use common::model::{damage::DiscountedDamageModel, parameters::ParameterFile};
use fund::diagnostics::runner::DiagnosticRunner;
use fund::version::{FULL_VERSION, LONG_VERSION};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(
    version,
    long_version=LONG_VERSION,
    about="Long-term diagnostics of the FUND model",
    long_about="Computes the social cost of carbon, methane, nitrous oxide and sulphur hexafluoride \
for a fixed set of discount rates, with and without equity weights, and records every value \
in a delimited text file or in a SQLite database."
)]
struct Args {
    #[arg(
        required = true,
        help = "Reporting date in the format YYYYMMDDHHMM",
        index = 1
    )]
    date: String,

    #[arg(required = true, help = "Path to the configuration file", index = 2)]
    config_path: String,

    #[arg(long, help = "Diagnostic level, overrides the configured one")]
    level: Option<i32>,
}

fn run_diagnostics(
    configs: &ConfigContainer,
    date: &DateTime<Utc>,
    level: i32,
) -> Result<(), FundError> {
    let runner = DiagnosticRunner::new(
        ParameterFile::new(&configs.parameters_path),
        DiscountedDamageModel,
    )
    .with_parameter_cache(configs.cache_parameters);

    let mut transport = OutputTransport::open(&configs.output)?;

    let run = {
        let mut sink = transport.sink(*date)?;
        runner.run(sink.as_mut(), level)
    };

    // release the transport even when the run failed, keeping what was written
    let closed = transport.close();
    run?;
    closed
}

/// main function
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();
    info!("{}", FULL_VERSION);

    if !Path::new(&args.config_path).is_file() {
        return Err(format!("Config file {} is not a file", args.config_path).into());
    }

    let date = parse_run_date(&args.date)?;

    let configs = ConfigContainer::from_file(&args.config_path)
        .map_err(|err| format!("Failed to load config: {}", err))?;

    let level = args.level.unwrap_or(configs.level);
    info!("Running diagnostic level {} for {}", level, date);
    let start_time = Utc::now();

    if let Err(err) = run_diagnostics(&configs, &date, level) {
        warn!("Error running diagnostics: {}", err);
        return Err(err.into());
    }

    let elapsed_time = Utc::now() - start_time;
    info!("Elapsed time: {} seconds", elapsed_time.num_seconds());
    Ok(())
}
