//! Fund suitability rules
//!
//! Flags fund choices that sit badly with the affiliate's retirement
//! horizon, measured against the statutory retirement age of 65.

use crate::records::{FundKind, STATUTORY_RETIREMENT_AGE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizon below which the growth fund draws a warning, years
pub const NEAR_RETIREMENT_YEARS: i32 = 10;

/// Horizon above which the conservative fund draws a warning, years
pub const LONG_HORIZON_YEARS: i32 = 20;

/// Why a candidate fund is flagged for a given age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitabilityWarning {
    /// Growth fund with fewer than 10 years to retirement
    NearRetirementGrowth,
    /// Conservative fund with more than 20 years to retirement
    LongHorizonConservative,
}

impl SuitabilityWarning {
    pub fn message(&self) -> &'static str {
        match self {
            SuitabilityWarning::NearRetirementGrowth => {
                "this fund may be unsuitable for profiles close to retirement"
            }
            SuitabilityWarning::LongHorizonConservative => {
                "this fund may yield insufficient returns over a long horizon"
            }
        }
    }
}

impl fmt::Display for SuitabilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Years between `age` and the statutory retirement age
pub fn retirement_horizon(age: u8) -> i32 {
    i32::from(STATUTORY_RETIREMENT_AGE) - i32::from(age)
}

/// Evaluate a candidate fund for an affiliate of the given age
///
/// The two warnings are mutually exclusive: horizons between 10 and 20
/// years inclusive never warn.
pub fn evaluate_fund_choice(age: u8, candidate: FundKind) -> Option<SuitabilityWarning> {
    let horizon = retirement_horizon(age);
    match candidate {
        FundKind::Growth if horizon < NEAR_RETIREMENT_YEARS => {
            Some(SuitabilityWarning::NearRetirementGrowth)
        }
        FundKind::Conservative if horizon > LONG_HORIZON_YEARS => {
            Some(SuitabilityWarning::LongHorizonConservative)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_near_retirement_warns() {
        // 5 years to retirement
        assert_eq!(
            evaluate_fund_choice(60, FundKind::Growth),
            Some(SuitabilityWarning::NearRetirementGrowth)
        );
    }

    #[test]
    fn test_conservative_long_horizon_warns() {
        // 35 years to retirement
        assert_eq!(
            evaluate_fund_choice(30, FundKind::Conservative),
            Some(SuitabilityWarning::LongHorizonConservative)
        );
    }

    #[test]
    fn test_balanced_never_warns() {
        for age in [25, 50, 64, 70] {
            assert_eq!(evaluate_fund_choice(age, FundKind::Balanced), None);
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        // Exactly 10 years to retirement: growth is acceptable
        assert_eq!(evaluate_fund_choice(55, FundKind::Growth), None);
        // 9 years: flagged
        assert!(evaluate_fund_choice(56, FundKind::Growth).is_some());

        // Exactly 20 years: conservative is acceptable
        assert_eq!(evaluate_fund_choice(45, FundKind::Conservative), None);
        // 21 years: flagged
        assert!(evaluate_fund_choice(44, FundKind::Conservative).is_some());
    }

    #[test]
    fn test_mid_horizon_never_warns() {
        // Horizons of 10..=20 years warn for no fund
        for age in 45..=55u8 {
            for kind in FundKind::ALL {
                assert_eq!(evaluate_fund_choice(age, kind), None);
            }
        }
    }
}
