//! Compliance finding records

use crate::dataset::Dataset;
use crate::records::{FundKind, RiskLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Affiliate whose fund does not match their age bracket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundMismatch {
    pub affiliate_id: u32,
    pub name: String,
    pub age: u8,
    pub current_fund: FundKind,
    pub insufficiency_risk: RiskLevel,
}

/// Affiliate whose stored base projection falls below the replacement floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsufficiencyFinding {
    pub affiliate_id: u32,
    pub name: String,
    pub monthly_salary: f64,
    pub base_pension: f64,

    /// Base pension as a percentage of salary, 1 decimal
    pub pct_of_salary: f64,

    /// Stored contribution recommendation
    pub recommendation: String,
}

/// Single transaction exceeding the affiliate's atypical-amount threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtypicalContribution {
    pub affiliate_id: u32,
    pub name: String,
    pub date: NaiveDate,
    pub amount: f64,

    /// Mean contribution amount for this affiliate
    pub mean: f64,

    /// Sample standard deviation of this affiliate's contributions
    pub std_dev: f64,
}

/// Aggregate outcome of all three scans
///
/// Empty vectors are valid outcomes, not failures; a report can only be
/// produced over a fully loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub fund_mismatches: Vec<FundMismatch>,
    pub insufficiencies: Vec<InsufficiencyFinding>,
    pub atypical_contributions: Vec<AtypicalContribution>,
}

impl ComplianceReport {
    /// Run all three scans over the dataset
    pub fn run(dataset: &Dataset) -> Self {
        Self {
            fund_mismatches: super::check_fund_alignment(dataset),
            insufficiencies: super::check_pension_sufficiency(dataset),
            atypical_contributions: super::check_atypical_contributions(dataset),
        }
    }

    pub fn total_findings(&self) -> usize {
        self.fund_mismatches.len() + self.insufficiencies.len() + self.atypical_contributions.len()
    }

    pub fn is_clear(&self) -> bool {
        self.total_findings() == 0
    }
}
