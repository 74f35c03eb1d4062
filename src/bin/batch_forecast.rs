//! Run pension forecasts for the entire affiliate table
//!
//! Outputs one row per affiliate for block-level review.
//! Accepts config via environment variables:
//!   DATA_DIR, MONTHLY_CONTRIBUTION, SALARY_GROWTH_PCT

use pension_system::dataset::DEFAULT_DATA_PATH;
use pension_system::forecast::{ForecastEngine, ForecastInput};
use pension_system::Dataset;
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let monthly_contribution = env_f64("MONTHLY_CONTRIBUTION", 1_000.0);
    let salary_growth_pct = env_f64("SALARY_GROWTH_PCT", 3.5);

    println!("Loading dataset from {data_dir}...");
    let dataset = Dataset::provision_and_load(&data_dir)?;
    println!(
        "Loaded {} affiliates in {:?}",
        dataset.affiliates().len(),
        start.elapsed()
    );

    let engine = ForecastEngine::default();
    let profiles = dataset.profiles();

    println!("Running forecasts...");
    let forecast_start = Instant::now();

    // Forecasts are pure per-affiliate functions, so the block runs in parallel
    let results: Vec<_> = profiles
        .par_iter()
        .map(|profile| {
            let input = ForecastInput {
                current_age: profile.affiliate.age,
                monthly_salary: profile.affiliate.monthly_salary,
                years_contributed: profile.affiliate.years_contributed,
                monthly_contribution,
                salary_growth_pct,
                retirement_age: profile.projection.retirement_age,
            };
            engine
                .project(&input)
                .map(|result| (profile.affiliate, result))
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!(
        "Projected {} affiliates in {:?}",
        results.len(),
        forecast_start.elapsed()
    );

    let csv_path = "batch_forecast_output.csv";
    let mut file = File::create(csv_path)?;
    writeln!(
        file,
        "affiliate_id,name,age,monthly_salary,years_contributed,projected_pension,insufficient"
    )?;
    for (affiliate, result) in &results {
        writeln!(
            file,
            "{},{},{},{:.2},{},{:.2},{}",
            affiliate.id,
            affiliate.name,
            affiliate.age,
            affiliate.monthly_salary,
            affiliate.years_contributed,
            result.projected_pension,
            result.insufficient
        )?;
    }
    println!("Full results written to: {csv_path}");

    let insufficient = results.iter().filter(|(_, r)| r.insufficient).count();
    let average =
        results.iter().map(|(_, r)| r.projected_pension).sum::<f64>() / results.len() as f64;

    println!("\nSummary:");
    println!("  Affiliates projected: {}", results.len());
    println!("  Average projection:   ${average:.2}");
    println!("  Flagged insufficient: {insufficient}");

    Ok(())
}
