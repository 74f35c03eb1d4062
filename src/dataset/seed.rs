//! Deterministic demonstration data and idempotent file provisioning
//!
//! When a dataset file is absent the fixed rows below are written in its
//! place. Existing files are never touched, so repeated provisioning leaves
//! contents and row counts unchanged. Synthesis is the recovery path for
//! *absent* files only; malformed files always fail the load.

use crate::error::PensionResult;
use crate::records::{
    Affiliate, EducationLevel, Fund, FundKind, MaritalStatus, PensionProjection, RiskLevel,
    Transaction, TransactionKind,
};
use chrono::NaiveDate;
use log::info;
use std::path::Path;

/// Fixed 10-row affiliate demonstration set
pub fn demo_affiliates() -> Vec<Affiliate> {
    use EducationLevel::{HighSchool, University};
    use FundKind::{Balanced, Conservative, Growth};
    use MaritalStatus::{Divorced, Married, Single};
    use RiskLevel::{High, Low, Medium};

    let rows = [
        (1, "Juan Perez", 45, 25_000.0, 15, Married, 2, University, Medium, Balanced),
        (2, "Maria Garcia", 38, 32_000.0, 10, Single, 0, University, Low, Growth),
        (3, "Carlos Lopez", 52, 18_000.0, 28, Married, 3, University, High, Conservative),
        (4, "Ana Martinez", 29, 28_000.0, 5, Single, 0, University, Low, Growth),
        (5, "Luis Ramirez", 60, 15_000.0, 35, Married, 1, University, High, Conservative),
        (6, "Sofia Diaz", 41, 38_000.0, 18, Divorced, 2, University, Medium, Balanced),
        (7, "Jorge Cruz", 35, 42_000.0, 12, Single, 0, University, Low, Growth),
        (8, "Patricia Ruiz", 48, 29_000.0, 22, Married, 3, HighSchool, Medium, Balanced),
        (9, "Fernando Vazquez", 55, 21_000.0, 30, Married, 2, HighSchool, High, Conservative),
        (10, "Adriana Soto", 33, 35_000.0, 8, Single, 1, HighSchool, Low, Growth),
    ];

    rows.into_iter()
        .map(
            |(id, name, age, salary, years, marital, children, education, risk, fund)| Affiliate {
                id,
                name: name.to_string(),
                age,
                monthly_salary: salary,
                years_contributed: years,
                marital_status: marital,
                children,
                education,
                insufficiency_risk: risk,
                current_fund: fund,
            },
        )
        .collect()
}

/// Fixed projection set matching the demonstration affiliates 1:1
pub fn demo_projections() -> Vec<PensionProjection> {
    let rows = [
        (1, 12_500.0, 14_500.0, 10_500.0, "Increase by 2000 monthly"),
        (2, 18_000.0, 21_000.0, 15_000.0, "Maintain current contribution"),
        (3, 8_500.0, 9_500.0, 7_500.0, "Increase by 3000 monthly"),
        (4, 22_000.0, 25_000.0, 19_000.0, "Maintain current contribution"),
        (5, 7_000.0, 8_000.0, 6_000.0, "Increase by 2500 monthly"),
        (6, 16_000.0, 18_500.0, 13_500.0, "Increase by 1000 monthly"),
        (7, 24_000.0, 27_500.0, 20_500.0, "Maintain current contribution"),
        (8, 13_500.0, 15_500.0, 11_500.0, "Increase by 1500 monthly"),
        (9, 9_000.0, 10_500.0, 7_500.0, "Increase by 3000 monthly"),
        (10, 19_500.0, 22_500.0, 16_500.0, "Maintain current contribution"),
    ];

    rows.into_iter()
        .map(|(id, base, optimistic, pessimistic, advice)| PensionProjection {
            affiliate_id: id,
            retirement_age: 65,
            base_pension: base,
            optimistic_pension: optimistic,
            pessimistic_pension: pessimistic,
            recommendation: advice.to_string(),
        })
        .collect()
}

/// Fixed three-row fund catalog
pub fn demo_funds() -> Vec<Fund> {
    vec![
        Fund {
            kind: FundKind::Conservative,
            annual_return_pct: 4.5,
            risk: RiskLevel::Low,
            annual_fee_pct: 0.8,
            recommended_profile: "Near retirement".to_string(),
            five_year_return_pct: 24.6,
        },
        Fund {
            kind: FundKind::Balanced,
            annual_return_pct: 6.8,
            risk: RiskLevel::Medium,
            annual_fee_pct: 1.2,
            recommended_profile: "Medium horizon".to_string(),
            five_year_return_pct: 39.1,
        },
        Fund {
            kind: FundKind::Growth,
            annual_return_pct: 8.2,
            risk: RiskLevel::High,
            annual_fee_pct: 1.5,
            recommended_profile: "Long horizon".to_string(),
            five_year_return_pct: 48.3,
        },
    ]
}

/// Fixed 10-row voluntary contribution log
///
/// Affiliate 1 has two identical contributions (the never-flagged outlier
/// case), affiliate 10 has none.
pub fn demo_transactions() -> Vec<Transaction> {
    let rows = [
        (1, (2024, 1, 15), 2_500.0),
        (1, (2024, 2, 18), 2_500.0),
        (2, (2024, 1, 20), 1_500.0),
        (3, (2024, 1, 10), 1_000.0),
        (4, (2024, 2, 5), 3_000.0),
        (5, (2024, 1, 22), 800.0),
        (6, (2024, 2, 28), 2_000.0),
        (7, (2024, 1, 30), 1_800.0),
        (8, (2024, 2, 12), 1_200.0),
        (9, (2024, 1, 8), 900.0),
    ];

    rows.into_iter()
        .filter_map(|(id, (y, m, d), amount)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Transaction {
                affiliate_id: id,
                date,
                amount,
                kind: TransactionKind::Contribution,
                concept: "Voluntary".to_string(),
            })
        })
        .collect()
}

fn write_affiliates(path: &Path) -> PensionResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "id",
        "name",
        "age",
        "monthly_salary",
        "years_contributed",
        "marital_status",
        "children",
        "education",
        "insufficiency_risk",
        "current_fund",
    ])?;
    for a in demo_affiliates() {
        writer.write_record([
            a.id.to_string(),
            a.name,
            a.age.to_string(),
            a.monthly_salary.to_string(),
            a.years_contributed.to_string(),
            a.marital_status.as_str().to_string(),
            a.children.to_string(),
            a.education.as_str().to_string(),
            a.insufficiency_risk.as_str().to_string(),
            a.current_fund.as_str().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_projections(path: &Path) -> PensionResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "affiliate_id",
        "retirement_age",
        "base_projected_pension",
        "optimistic_projection",
        "pessimistic_projection",
        "contribution_recommendation",
    ])?;
    for p in demo_projections() {
        writer.write_record([
            p.affiliate_id.to_string(),
            p.retirement_age.to_string(),
            p.base_pension.to_string(),
            p.optimistic_pension.to_string(),
            p.pessimistic_pension.to_string(),
            p.recommendation,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_funds(path: &Path) -> PensionResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "name",
        "annual_return_pct",
        "risk_level",
        "annual_fee_pct",
        "recommended_profile",
        "five_year_return_pct",
    ])?;
    for f in demo_funds() {
        writer.write_record([
            f.kind.as_str().to_string(),
            f.annual_return_pct.to_string(),
            f.risk.as_str().to_string(),
            f.annual_fee_pct.to_string(),
            f.recommended_profile,
            f.five_year_return_pct.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_transactions(path: &Path) -> PensionResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["affiliate_id", "date", "amount", "type", "concept"])?;
    for t in demo_transactions() {
        writer.write_record([
            t.affiliate_id.to_string(),
            t.date.to_string(),
            t.amount.to_string(),
            t.kind.as_str().to_string(),
            t.concept,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write demonstration rows for every dataset file absent from `dir`
///
/// Creates the directory when needed. Existing files keep their contents.
pub fn provision<P: AsRef<Path>>(dir: P) -> PensionResult<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let tables: [(&str, fn(&Path) -> PensionResult<()>); 4] = [
        (super::AFFILIATES_FILE, write_affiliates),
        (super::PROJECTIONS_FILE, write_projections),
        (super::FUNDS_FILE, write_funds),
        (super::TRANSACTIONS_FILE, write_transactions),
    ];

    for (file, write) in tables {
        let path = dir.join(file);
        if path.exists() {
            continue;
        }
        info!("synthesizing demonstration data: {}", path.display());
        write(&path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::loader;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("pension_seed_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_demo_row_counts() {
        assert_eq!(demo_affiliates().len(), 10);
        assert_eq!(demo_projections().len(), 10);
        assert_eq!(demo_funds().len(), 3);
        assert_eq!(demo_transactions().len(), 10);
    }

    #[test]
    fn test_provisioned_files_round_trip() {
        let dir = scratch_dir("round_trip");
        provision(&dir).unwrap();

        let affiliates = loader::load_affiliates(dir.join(super::super::AFFILIATES_FILE)).unwrap();
        assert_eq!(affiliates.len(), 10);
        assert_eq!(affiliates[4].name, "Luis Ramirez");
        assert_eq!(affiliates[4].age, 60);

        let transactions =
            loader::load_transactions(dir.join(super::super::TRANSACTIONS_FILE)).unwrap();
        assert_eq!(transactions.len(), 10);
        assert_eq!(transactions[0].amount, 2500.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_provision_is_idempotent() {
        let dir = scratch_dir("idempotent");
        provision(&dir).unwrap();

        let path = dir.join(super::super::AFFILIATES_FILE);
        let first = std::fs::read_to_string(&path).unwrap();

        // A second provisioning pass must not rewrite existing files
        provision(&dir).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);

        // Nor may it clobber files the operator has edited
        std::fs::write(&path, "id,name\n99,Edited\n").unwrap();
        provision(&dir).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "id,name\n99,Edited\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
