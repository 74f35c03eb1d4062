//! Pension System CLI
//!
//! Command-line views over the loaded dataset; each subcommand corresponds
//! to one module of the administrator's dashboard.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use pension_system::advisory;
use pension_system::analytics;
use pension_system::compliance;
use pension_system::dataset::DEFAULT_DATA_PATH;
use pension_system::forecast::{ForecastEngine, ForecastInput, ForecastResult};
use pension_system::{Dataset, FundKind};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pension_system",
    version,
    about = "Pension analytics for a retirement-savings administrator"
)]
struct Cli {
    /// Directory holding the dataset CSVs; demonstration data is synthesized
    /// for any absent file
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Headline metrics, fund distribution and the affiliate table
    Overview,

    /// Project a pension from personal parameters
    Forecast {
        /// Current age
        #[arg(long)]
        age: u8,

        /// Current monthly salary
        #[arg(long)]
        salary: f64,

        /// Years of mandatory contributions so far
        #[arg(long)]
        years_contributed: u32,

        /// Planned monthly voluntary contribution
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,

        /// Estimated annual salary growth, percent
        #[arg(long, default_value_t = 3.5)]
        growth: f64,

        /// Planned retirement age
        #[arg(long, default_value_t = 65)]
        retirement_age: u8,

        /// Write the year-by-year schedule to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Personalized advisory for one affiliate
    Advise {
        /// Affiliate id
        #[arg(long)]
        affiliate: u32,
    },

    /// Fund catalog and distribution, optionally reviewing a switch
    Funds {
        /// Affiliate considering a switch
        #[arg(long)]
        affiliate: Option<u32>,

        /// Candidate fund to review for that affiliate
        #[arg(long, value_enum)]
        target: Option<FundArg>,
    },

    /// Contribution behavior patterns
    Behavior,

    /// Run compliance scans
    Compliance {
        /// Which scan to run
        #[arg(long, value_enum, default_value = "all")]
        check: CheckArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FundArg {
    Conservative,
    Balanced,
    Growth,
}

impl From<FundArg> for FundKind {
    fn from(value: FundArg) -> Self {
        match value {
            FundArg::Conservative => FundKind::Conservative,
            FundArg::Balanced => FundKind::Balanced,
            FundArg::Growth => FundKind::Growth,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CheckArg {
    All,
    Funds,
    Pensions,
    Contributions,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Overview => cmd_overview(&load(&cli.data_dir)?),
        Command::Forecast {
            age,
            salary,
            years_contributed,
            contribution,
            growth,
            retirement_age,
            output,
        } => cmd_forecast(
            ForecastInput {
                current_age: age,
                monthly_salary: salary,
                years_contributed,
                monthly_contribution: contribution,
                salary_growth_pct: growth,
                retirement_age,
            },
            output.as_deref(),
        ),
        Command::Advise { affiliate } => cmd_advise(&load(&cli.data_dir)?, affiliate),
        Command::Funds { affiliate, target } => {
            cmd_funds(&load(&cli.data_dir)?, affiliate, target.map(FundKind::from))
        }
        Command::Behavior => cmd_behavior(&load(&cli.data_dir)?),
        Command::Compliance { check } => cmd_compliance(&load(&cli.data_dir)?, check),
    }
}

fn load(dir: &Path) -> anyhow::Result<Dataset> {
    Dataset::provision_and_load(dir)
        .with_context(|| format!("failed to initialize dataset in {}", dir.display()))
}

fn cmd_overview(dataset: &Dataset) -> anyhow::Result<()> {
    println!("Pension System v0.1.0");
    println!("=====================\n");

    let metrics = analytics::headline_metrics(dataset);
    println!("Affiliates:                {}", metrics.total_affiliates);
    println!("Average projected pension: ${:.2}", metrics.average_base_pension);
    println!(
        "High-risk affiliates:      {} ({:.1}%)",
        metrics.high_risk_count, metrics.high_risk_pct
    );

    println!("\nFund distribution:");
    for (kind, count) in analytics::fund_distribution(dataset) {
        println!("  {:<14} {:>3}", kind.to_string(), count);
    }

    println!();
    println!(
        "{:>4} {:<18} {:>4} {:>10} {:>6} {:<14} {:<8} {:>12}",
        "ID", "Name", "Age", "Salary", "Years", "Fund", "Risk", "Projected"
    );
    println!("{}", "-".repeat(84));
    for profile in dataset.profiles() {
        let a = profile.affiliate;
        println!(
            "{:>4} {:<18} {:>4} {:>10.2} {:>6} {:<14} {:<8} {:>12.2}",
            a.id,
            a.name,
            a.age,
            a.monthly_salary,
            a.years_contributed,
            a.current_fund.to_string(),
            a.insufficiency_risk.to_string(),
            profile.projection.base_pension,
        );
    }

    Ok(())
}

fn cmd_forecast(input: ForecastInput, output: Option<&Path>) -> anyhow::Result<()> {
    let result = ForecastEngine::default().project(&input)?;

    println!("Projected monthly pension: ${:.2}", result.projected_pension);
    if result.insufficient {
        println!("\nWARNING: risk of insufficient pension detected");
        println!("  - Increase voluntary contributions");
        println!("  - Consider extending contribution years");
        println!("  - Review the fund investment strategy");
    }

    println!("\nYear-by-year schedule ({} points):", result.schedule_len());
    println!("{:>4} {:>14}", "Age", "Pension");
    println!("{}", "-".repeat(19));
    for point in &result.schedule {
        println!("{:>4} {:>14.2}", point.age, point.projected_pension);
    }

    if let Some(path) = output {
        write_schedule_csv(path, &result)?;
        println!("\nSchedule written to: {}", path.display());
    }

    Ok(())
}

fn write_schedule_csv(path: &Path, result: &ForecastResult) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("unable to create {}", path.display()))?;
    writeln!(file, "age,projected_pension")?;
    for point in &result.schedule {
        writeln!(file, "{},{:.2}", point.age, point.projected_pension)?;
    }
    Ok(())
}

fn cmd_advise(dataset: &Dataset, affiliate_id: u32) -> anyhow::Result<()> {
    let Some(affiliate) = dataset.affiliate(affiliate_id) else {
        bail!("affiliate {affiliate_id} not found");
    };
    let Some(projection) = dataset.projection_for(affiliate_id) else {
        bail!("affiliate {affiliate_id} has no stored projection");
    };

    println!("Affiliate: {} (id {})", affiliate.name, affiliate.id);
    println!("  Age:                {}", affiliate.age);
    println!("  Monthly salary:     ${:.2}", affiliate.monthly_salary);
    println!("  Years contributed:  {}", affiliate.years_contributed);
    println!("  Current fund:       {}", affiliate.current_fund);
    println!("  Projected pension:  ${:.2}", projection.base_pension);
    println!("  Insufficiency risk: {}", affiliate.insufficiency_risk);
    println!("  Recommendation:     {}", projection.recommendation);

    println!("\n{}", advisory::assessment_for(affiliate.insufficiency_risk));
    for item in advisory::recommendations_for(affiliate.insufficiency_risk) {
        println!("  - {item}");
    }

    let history = dataset.transactions_for(affiliate_id);
    if history.is_empty() {
        println!("\nNo voluntary contributions on record.");
    } else {
        println!("\nContribution history:");
        println!("{:>12} {:>10}  {}", "Date", "Amount", "Concept");
        for transaction in history {
            println!(
                "{:>12} {:>10.2}  {}",
                transaction.date.to_string(),
                transaction.amount,
                transaction.concept
            );
        }
    }

    print_fund_catalog(dataset);
    Ok(())
}

fn print_fund_catalog(dataset: &Dataset) {
    println!("\nFund catalog:");
    println!(
        "{:<14} {:>9} {:<8} {:>7} {:>9}  {}",
        "Fund", "Return%", "Risk", "Fee%", "5y Ret%", "Profile"
    );
    for fund in dataset.funds() {
        println!(
            "{:<14} {:>9.1} {:<8} {:>7.1} {:>9.1}  {}",
            fund.kind.to_string(),
            fund.annual_return_pct,
            fund.risk.to_string(),
            fund.annual_fee_pct,
            fund.five_year_return_pct,
            fund.recommended_profile,
        );
    }
}

fn cmd_funds(
    dataset: &Dataset,
    affiliate_id: Option<u32>,
    target: Option<FundKind>,
) -> anyhow::Result<()> {
    print_fund_catalog(dataset);

    println!("\nAffiliates per fund:");
    for (kind, count) in analytics::fund_distribution(dataset) {
        println!("  {:<14} {:>3}", kind.to_string(), count);
    }

    let (Some(affiliate_id), Some(target)) = (affiliate_id, target) else {
        if affiliate_id.is_some() || target.is_some() {
            bail!("a switch review needs both --affiliate and --target");
        }
        return Ok(());
    };

    let Some(affiliate) = dataset.affiliate(affiliate_id) else {
        bail!("affiliate {affiliate_id} not found");
    };
    let Some(fund) = dataset.fund(target) else {
        bail!("fund {target} missing from catalog");
    };

    let review = advisory::review_fund_switch(affiliate, fund);
    println!(
        "\nSwitch review for {} (age {}, currently {}):",
        affiliate.name, affiliate.age, affiliate.current_fund
    );
    println!("  Target fund:        {}", review.fund.kind);
    println!("  Expected return:    {:.1}%", review.fund.annual_return_pct);
    println!("  Risk level:         {}", review.fund.risk);
    println!("  Annual fee:         {:.1}%", review.fund.annual_fee_pct);
    println!("  Recommended for:    {}", review.fund.recommended_profile);
    match review.warning {
        Some(warning) => println!("  WARNING: {warning}"),
        None => println!("  No suitability concerns for this horizon."),
    }

    Ok(())
}

fn cmd_behavior(dataset: &Dataset) -> anyhow::Result<()> {
    println!("Contributions per affiliate:");
    println!("{:>4} {:<18} {:>6}", "ID", "Name", "Count");
    for count in analytics::contribution_counts(dataset) {
        println!(
            "{:>4} {:<18} {:>6}",
            count.affiliate_id, count.name, count.contributions
        );
    }

    println!("\nSalary vs voluntary contribution:");
    println!("{:>4} {:>4} {:>10} {:>10}", "ID", "Age", "Salary", "Amount");
    for point in analytics::salary_contribution_pairs(dataset) {
        println!(
            "{:>4} {:>4} {:>10.2} {:>10.2}",
            point.affiliate_id, point.age, point.monthly_salary, point.amount
        );
    }

    Ok(())
}

fn cmd_compliance(dataset: &Dataset, check: CheckArg) -> anyhow::Result<()> {
    if matches!(check, CheckArg::All | CheckArg::Funds) {
        let findings = compliance::check_fund_alignment(dataset);
        if findings.is_empty() {
            println!("All affiliates hold funds appropriate for their age.");
        } else {
            println!(
                "Found {} affiliate(s) with funds potentially unsuitable for their age:",
                findings.len()
            );
            println!("{:>4} {:<18} {:>4} {:<14} {}", "ID", "Name", "Age", "Fund", "Risk");
            for f in &findings {
                println!(
                    "{:>4} {:<18} {:>4} {:<14} {}",
                    f.affiliate_id,
                    f.name,
                    f.age,
                    f.current_fund.to_string(),
                    f.insufficiency_risk
                );
            }
        }
    }

    if matches!(check, CheckArg::All | CheckArg::Pensions) {
        let findings = compliance::check_pension_sufficiency(dataset);
        if findings.is_empty() {
            println!("No insufficient projected pensions detected.");
        } else {
            println!("Found {} insufficient projected pension(s):", findings.len());
            println!(
                "{:>4} {:<18} {:>10} {:>10} {:>7}  {}",
                "ID", "Name", "Salary", "Pension", "Pct", "Recommendation"
            );
            for f in &findings {
                println!(
                    "{:>4} {:<18} {:>10.2} {:>10.2} {:>6.1}%  {}",
                    f.affiliate_id, f.name, f.monthly_salary, f.base_pension, f.pct_of_salary,
                    f.recommendation
                );
            }
        }
    }

    if matches!(check, CheckArg::All | CheckArg::Contributions) {
        let findings = compliance::check_atypical_contributions(dataset);
        if findings.is_empty() {
            println!("No atypical contributions detected.");
        } else {
            println!("Detected {} atypical contribution(s):", findings.len());
            println!(
                "{:<18} {:>12} {:>10} {:>10} {:>10}",
                "Name", "Date", "Amount", "Mean", "StdDev"
            );
            for f in &findings {
                println!(
                    "{:<18} {:>12} {:>10.2} {:>10.2} {:>10.2}",
                    f.name,
                    f.date.to_string(),
                    f.amount,
                    f.mean,
                    f.std_dev
                );
            }
        }
    }

    Ok(())
}
