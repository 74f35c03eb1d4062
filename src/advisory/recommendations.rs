//! Personalized advisory content

use super::suitability::{evaluate_fund_choice, SuitabilityWarning};
use crate::records::{Affiliate, Fund, RiskLevel};

/// Fixed advisory checklist for an insufficiency-risk tier
pub fn recommendations_for(risk: RiskLevel) -> &'static [&'static str] {
    match risk {
        RiskLevel::High => &[
            "Increase voluntary contributions per the stored recommendation",
            "Consider switching to the fund suited to the retirement horizon",
            "Evaluate delaying retirement",
        ],
        RiskLevel::Medium => &[
            "Follow the recommended contribution increase",
            "Review whether the current fund still fits",
            "Monitor changes in employment status",
        ],
        RiskLevel::Low => &[
            "Maintain the current strategy",
            "Consider diversifying investments",
            "Review projections periodically",
        ],
    }
}

/// One-line assessment headline per risk tier
pub fn assessment_for(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "High risk of insufficient pension detected",
        RiskLevel::Medium => "Moderate risk of insufficient pension",
        RiskLevel::Low => "Projected pension is at a good level",
    }
}

/// Outcome of reviewing a prospective switch to another fund
#[derive(Debug, Clone)]
pub struct FundSwitchReview<'a> {
    /// Catalog entry of the candidate fund
    pub fund: &'a Fund,

    /// Suitability warning for the affiliate's age, if any
    pub warning: Option<SuitabilityWarning>,
}

/// Review a prospective fund switch for an affiliate
pub fn review_fund_switch<'a>(affiliate: &Affiliate, target: &'a Fund) -> FundSwitchReview<'a> {
    FundSwitchReview {
        fund: target,
        warning: evaluate_fund_choice(affiliate.age, target.kind),
    }
}
