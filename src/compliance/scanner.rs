//! Compliance scans over the loaded tables
//!
//! Three independent checks, each a pure pass over the full dataset
//! producing an order-preserving filtered result set. Empty results are
//! first-class outcomes; "no data loaded" cannot occur here because a
//! `Dataset` is validated at construction.

use super::types::{AtypicalContribution, FundMismatch, InsufficiencyFinding};
use crate::dataset::Dataset;
use crate::records::FundKind;
use log::debug;
use std::collections::HashMap;

/// Growth holdings are flagged above this age
const GROWTH_AGE_LIMIT: u8 = 55;

/// Conservative holdings are flagged below this age
const CONSERVATIVE_AGE_FLOOR: u8 = 40;

/// Floor on the base pension as a fraction of salary
const MIN_REPLACEMENT_RATIO: f64 = 0.40;

/// Deviations beyond this many sample standard deviations are atypical
const ATYPICAL_SIGMA: f64 = 2.0;

/// Flag affiliates whose fund does not match their age bracket
///
/// Older affiliates in the growth fund carry outsized drawdown risk;
/// younger affiliates in the conservative fund give up expected return.
pub fn check_fund_alignment(dataset: &Dataset) -> Vec<FundMismatch> {
    let findings: Vec<FundMismatch> = dataset
        .affiliates()
        .iter()
        .filter(|a| {
            (a.age > GROWTH_AGE_LIMIT && a.current_fund == FundKind::Growth)
                || (a.age < CONSERVATIVE_AGE_FLOOR && a.current_fund == FundKind::Conservative)
        })
        .map(|a| FundMismatch {
            affiliate_id: a.id,
            name: a.name.clone(),
            age: a.age,
            current_fund: a.current_fund,
            insufficiency_risk: a.insufficiency_risk,
        })
        .collect();

    debug!("fund alignment scan: {} finding(s)", findings.len());
    findings
}

/// Flag affiliates whose stored base projection replaces less than 40% of
/// their salary
pub fn check_pension_sufficiency(dataset: &Dataset) -> Vec<InsufficiencyFinding> {
    let findings: Vec<InsufficiencyFinding> = dataset
        .profiles()
        .into_iter()
        .filter(|p| p.projection.base_pension < MIN_REPLACEMENT_RATIO * p.affiliate.monthly_salary)
        .map(|p| InsufficiencyFinding {
            affiliate_id: p.affiliate.id,
            name: p.affiliate.name.clone(),
            monthly_salary: p.affiliate.monthly_salary,
            base_pension: p.projection.base_pension,
            pct_of_salary: round_tenth(
                p.projection.base_pension / p.affiliate.monthly_salary * 100.0,
            ),
            recommendation: p.projection.recommendation.clone(),
        })
        .collect();

    debug!("pension sufficiency scan: {} finding(s)", findings.len());
    findings
}

/// Flag transactions exceeding the affiliate's mean + 2σ threshold
///
/// Statistics are computed over the affiliate's full history including the
/// transaction under test, with the sample (n−1) standard deviation.
/// Affiliates with fewer than two transactions are never flagged. Flagging
/// is per transaction, in log order.
pub fn check_atypical_contributions(dataset: &Dataset) -> Vec<AtypicalContribution> {
    let mut amounts: HashMap<u32, Vec<f64>> = HashMap::new();
    for transaction in dataset.transactions() {
        amounts
            .entry(transaction.affiliate_id)
            .or_default()
            .push(transaction.amount);
    }

    let stats: HashMap<u32, (f64, f64)> = amounts
        .iter()
        .filter(|(_, xs)| xs.len() >= 2)
        .map(|(&id, xs)| {
            let mean = mean(xs);
            (id, (mean, sample_std(xs, mean)))
        })
        .collect();

    let mut findings = Vec::new();
    for transaction in dataset.transactions() {
        let Some(&(mean, std_dev)) = stats.get(&transaction.affiliate_id) else {
            continue;
        };
        if transaction.amount <= mean + ATYPICAL_SIGMA * std_dev {
            continue;
        }
        let Some(affiliate) = dataset.affiliate(transaction.affiliate_id) else {
            continue;
        };
        findings.push(AtypicalContribution {
            affiliate_id: transaction.affiliate_id,
            name: affiliate.name.clone(),
            date: transaction.date,
            amount: transaction.amount,
            mean,
            std_dev,
        });
    }

    debug!("atypical contribution scan: {} finding(s)", findings.len());
    findings
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation (n−1 denominator); caller guarantees n ≥ 2
fn sample_std(xs: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = xs.iter().map(|x| (x - mean).powi(2)).sum();
    (sum_sq / (xs.len() - 1) as f64).sqrt()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
