//! Compliance scan report over the loaded dataset
//!
//! Runs all three scans. Supports JSON output for downstream tooling via
//! the --json flag; DATA_DIR selects the dataset directory.

use pension_system::analytics;
use pension_system::compliance::ComplianceReport;
use pension_system::dataset::DEFAULT_DATA_PATH;
use pension_system::Dataset;
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct ReportResponse {
    total_affiliates: usize,
    total_transactions: usize,
    high_risk_count: usize,
    findings: ComplianceReport,
    execution_time_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json = env::args().any(|arg| arg == "--json");
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    let start = Instant::now();
    let dataset = Dataset::provision_and_load(&data_dir)?;
    let findings = ComplianceReport::run(&dataset);
    let metrics = analytics::headline_metrics(&dataset);

    let response = ReportResponse {
        total_affiliates: metrics.total_affiliates,
        total_transactions: dataset.transactions().len(),
        high_risk_count: metrics.high_risk_count,
        findings,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    if json {
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    println!(
        "Compliance report: {} affiliates, {} transactions",
        response.total_affiliates, response.total_transactions
    );
    println!(
        "  Fund/age mismatches:     {}",
        response.findings.fund_mismatches.len()
    );
    println!(
        "  Insufficient pensions:   {}",
        response.findings.insufficiencies.len()
    );
    println!(
        "  Atypical contributions:  {}",
        response.findings.atypical_contributions.len()
    );

    if response.findings.is_clear() {
        println!("\nNo findings; all scans came back clean.");
        return Ok(());
    }

    for f in &response.findings.fund_mismatches {
        println!(
            "\n[fund/age] {} (id {}): age {} holding {}",
            f.name, f.affiliate_id, f.age, f.current_fund
        );
    }
    for f in &response.findings.insufficiencies {
        println!(
            "\n[sufficiency] {} (id {}): pension ${:.2} is {:.1}% of salary ${:.2} - {}",
            f.name, f.affiliate_id, f.base_pension, f.pct_of_salary, f.monthly_salary,
            f.recommendation
        );
    }
    for f in &response.findings.atypical_contributions {
        println!(
            "\n[atypical] {} (id {}): {} contribution ${:.2} vs mean ${:.2} + 2x std ${:.2}",
            f.name, f.affiliate_id, f.date, f.amount, f.mean, f.std_dev
        );
    }

    Ok(())
}
