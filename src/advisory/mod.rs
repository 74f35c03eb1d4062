//! Fund suitability rules and personalized advisory content

mod recommendations;
mod suitability;

pub use recommendations::{
    assessment_for, recommendations_for, review_fund_switch, FundSwitchReview,
};
pub use suitability::{
    evaluate_fund_choice, retirement_horizon, SuitabilityWarning, LONG_HORIZON_YEARS,
    NEAR_RETIREMENT_YEARS,
};
