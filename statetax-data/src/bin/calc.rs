use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use statetax_core::{FilingStatus, compute_tax};
use statetax_data::TaxDataset;
use tracing_subscriber::EnvFilter;

/// Compute income tax owed for one filer against a jurisdiction tax document.
///
/// The document is a JSON map keyed by jurisdiction name; each entry carries
/// an "incomeTax" object with per-filing-status bracket schedules plus an
/// optional "dependentExemption".
#[derive(Parser, Debug)]
#[command(name = "statetax-calc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON document containing per-jurisdiction tax schemas
    #[arg(short, long)]
    file: PathBuf,

    /// Jurisdiction to look up, e.g. "Massachusetts"
    #[arg(short, long)]
    jurisdiction: String,

    /// Filing status: single, married, marriedFilingSeparately,
    /// headOfHousehold, or qualifyingSurvivingSpouse
    #[arg(short, long, default_value = "single")]
    status: String,

    /// Gross annual income
    #[arg(short, long)]
    income: f64,

    /// Number of claimed dependents
    #[arg(short, long, default_value_t = 0)]
    dependents: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let Some(status) = FilingStatus::parse(&args.status) else {
        bail!("unknown filing status '{}'", args.status);
    };

    let dataset = TaxDataset::from_path(&args.file)
        .with_context(|| format!("failed to load tax data from: {}", args.file.display()))?;

    let schema = dataset
        .get(&args.jurisdiction)
        .with_context(|| format!("jurisdiction lookup failed for '{}'", args.jurisdiction))?;

    let result = compute_tax(schema, status, args.income, args.dependents).with_context(|| {
        format!(
            "failed to compute {} tax for '{}'",
            status, args.jurisdiction
        )
    })?;

    println!("{result}");
    Ok(())
}
