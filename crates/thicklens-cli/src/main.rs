//! Thicklens command-line interface.
//!
//! Solve lens prescriptions from TOML job files:
//! ```sh
//! thicklens-cli solve job.toml
//! thicklens-cli solve --set n1=1 --set nL=1.5 --set n2=1 --set r1=50 --set r2=-50 --set CT=5
//! thicklens-cli check job.toml
//! thicklens-cli variables
//! ```

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use thicklens_core::model::LensModel;
use thicklens_core::prescription::Prescription;
use thicklens_core::solver::Outcome;
use thicklens_core::variable::Variable;

#[derive(Parser)]
#[command(name = "thicklens-cli")]
#[command(about = "Thicklens: first-order lens design calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a prescription from a job file and/or --set overrides.
    Solve {
        /// Path to the job file (a [lens] table of known values).
        config: Option<PathBuf>,
        /// Known value override, e.g. --set nL=1.5 (repeatable).
        #[arg(short, long, value_name = "NAME=VALUE")]
        set: Vec<String>,
        /// Emit the resolved prescription as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Validate a job file and report known/unknown variables without solving.
    Check {
        /// Path to the job file.
        config: PathBuf,
    },
    /// List the seventeen lens variables and what they mean.
    Variables,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { config, set, json } => solve(config, &set, json),
        Commands::Check { config } => check(&config),
        Commands::Variables => {
            variables();
            Ok(())
        }
    }
}

fn solve(config: Option<PathBuf>, overrides: &[String], json: bool) -> anyhow::Result<()> {
    let mut prescription = match &config {
        Some(path) => {
            config::load_config(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
                .lens
        }
        None => Prescription::default(),
    };

    for entry in overrides {
        let (name, value) = entry
            .split_once('=')
            .with_context(|| format!("--set expects NAME=VALUE, got '{entry}'"))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("'{value}' is not a number"))?;
        prescription.assign(name.trim(), value)?;
    }

    let mut model = LensModel::new(prescription);
    let outcome = model.calculate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model.prescription)?);
        return Ok(());
    }

    match outcome {
        Outcome::AlreadyComplete => {
            println!("Nothing to compute: every variable already has a value.");
        }
        Outcome::Resolved { computed } => {
            println!("Resolved {} variable(s).", computed.len());
        }
    }
    println!("{model}");
    Ok(())
}

fn check(config: &std::path::Path) -> anyhow::Result<()> {
    let job = config::load_config(config)
        .with_context(|| format!("Failed to load {}", config.display()))?;

    println!("Job file is valid: {}", config.display());

    let known = job.lens.known();
    println!("Known ({}):", known.len());
    for (variable, value) in &known {
        println!("  {variable} = {value}");
    }

    let missing = job.lens.missing();
    println!("Unknown ({}):", missing.len());
    for variable in &missing {
        println!("  {variable}");
    }
    Ok(())
}

fn variables() {
    println!("Lens variables (report order):");
    println!();
    for variable in Variable::ALL {
        println!("  {:<4} — {}", variable.name(), variable.description());
    }
}
