//! Dashboard aggregates over the loaded tables
//!
//! Pure reads feeding the overview and behavior views; nothing here
//! mutates the dataset.

use crate::dataset::Dataset;
use crate::records::{FundKind, RiskLevel};
use serde::{Deserialize, Serialize};

/// Headline metrics for the overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineMetrics {
    pub total_affiliates: usize,

    /// Mean of the stored base projections
    pub average_base_pension: f64,

    /// Affiliates classified at high insufficiency risk
    pub high_risk_count: usize,

    /// High-risk share of the affiliate base, percent, 1 decimal
    pub high_risk_pct: f64,
}

/// Compute the overview headline metrics
pub fn headline_metrics(dataset: &Dataset) -> HeadlineMetrics {
    let total = dataset.affiliates().len();
    let average_base_pension =
        dataset.projections().iter().map(|p| p.base_pension).sum::<f64>() / total as f64;
    let high_risk_count = dataset
        .affiliates()
        .iter()
        .filter(|a| a.insufficiency_risk == RiskLevel::High)
        .count();

    HeadlineMetrics {
        total_affiliates: total,
        average_base_pension,
        high_risk_count,
        high_risk_pct: round_tenth(high_risk_count as f64 / total as f64 * 100.0),
    }
}

/// Affiliate count per fund, in catalog order
pub fn fund_distribution(dataset: &Dataset) -> Vec<(FundKind, usize)> {
    FundKind::ALL
        .into_iter()
        .map(|kind| {
            let count = dataset
                .affiliates()
                .iter()
                .filter(|a| a.current_fund == kind)
                .count();
            (kind, count)
        })
        .collect()
}

/// Number of logged contributions for one affiliate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionCount {
    pub affiliate_id: u32,
    pub name: String,
    pub contributions: usize,
}

/// Contribution counts per affiliate, in affiliate table order
///
/// Affiliates with no transactions are included with a zero count; the
/// behavior view uses them to spot inactive savers.
pub fn contribution_counts(dataset: &Dataset) -> Vec<ContributionCount> {
    dataset
        .affiliates()
        .iter()
        .map(|a| ContributionCount {
            affiliate_id: a.id,
            name: a.name.clone(),
            contributions: dataset.transactions_for(a.id).len(),
        })
        .collect()
}

/// One salary/contribution pair for the behavior view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryContributionPoint {
    pub affiliate_id: u32,
    pub age: u8,
    pub monthly_salary: f64,
    pub amount: f64,
}

/// Salary/amount pairs, one per transaction, in log order
pub fn salary_contribution_pairs(dataset: &Dataset) -> Vec<SalaryContributionPoint> {
    dataset
        .transactions()
        .iter()
        .filter_map(|t| {
            dataset.affiliate(t.affiliate_id).map(|a| SalaryContributionPoint {
                affiliate_id: a.id,
                age: a.age,
                monthly_salary: a.monthly_salary,
                amount: t.amount,
            })
        })
        .collect()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_metrics_over_demo() {
        let metrics = headline_metrics(&Dataset::demo());
        assert_eq!(metrics.total_affiliates, 10);
        assert!((metrics.average_base_pension - 15_050.0).abs() < 1e-9);
        assert_eq!(metrics.high_risk_count, 3);
        assert_eq!(metrics.high_risk_pct, 30.0);
    }

    #[test]
    fn test_fund_distribution_over_demo() {
        let distribution = fund_distribution(&Dataset::demo());
        assert_eq!(
            distribution,
            vec![
                (FundKind::Conservative, 3),
                (FundKind::Balanced, 3),
                (FundKind::Growth, 4),
            ]
        );
    }

    #[test]
    fn test_contribution_counts_include_inactive() {
        let counts = contribution_counts(&Dataset::demo());
        assert_eq!(counts.len(), 10);
        assert_eq!(counts[0].contributions, 2);
        assert_eq!(counts[9].affiliate_id, 10);
        assert_eq!(counts[9].contributions, 0);
    }

    #[test]
    fn test_salary_contribution_pairs() {
        let pairs = salary_contribution_pairs(&Dataset::demo());
        assert_eq!(pairs.len(), 10);
        assert_eq!(pairs[0].affiliate_id, 1);
        assert_eq!(pairs[0].monthly_salary, 25_000.0);
        assert_eq!(pairs[0].amount, 2_500.0);
    }
}
