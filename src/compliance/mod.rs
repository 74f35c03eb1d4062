//! Compliance and outlier scans

mod scanner;
mod types;

pub use scanner::{check_atypical_contributions, check_fund_alignment, check_pension_sufficiency};
pub use types::{AtypicalContribution, ComplianceReport, FundMismatch, InsufficiencyFinding};
