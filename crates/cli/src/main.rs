use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use fitcalc_domain::{SAMPLE_PACKAGES, TrainingInfo, TrainingType, read_package};
use log::info;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

/// Compute distance, mean speed and spent calories of sensor packages.
///
/// Without a workout code the packages of the reference recording are processed.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Workout code (SWM, RUN or WLK)
    code: Option<String>,

    /// Positional parameters of the package
    #[arg(requires = "code", allow_negative_numbers = true)]
    params: Vec<f64>,

    /// List the workout codes and their parameters
    #[arg(long, conflicts_with = "code")]
    list_codes: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut out = io::stdout().lock();

    if args.list_codes {
        for training_type in TrainingType::iter() {
            writeln!(
                out,
                "{training_type}: {}",
                training_type.parameter_names().join(", ")
            )?;
        }
        return Ok(());
    }

    let packages = match args.code {
        Some(code) => vec![(code, args.params)],
        None => SAMPLE_PACKAGES
            .iter()
            .map(|(code, data)| ((*code).to_string(), data.to_vec()))
            .collect(),
    };

    info!("processing {} packages", packages.len());

    for (code, data) in &packages {
        let training = read_package(code, data)
            .with_context(|| format!("failed to read package {code} {data:?}"))?;
        writeln!(out, "{}", training.show_training_info())?;
    }

    Ok(())
}
