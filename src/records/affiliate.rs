//! Affiliate reference data

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statutory retirement age used for horizon calculations
pub const STATUTORY_RETIREMENT_AGE: u8 = 65;

/// Investment fund tier offered by the administrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundKind {
    Conservative,
    Balanced,
    Growth,
}

impl FundKind {
    /// The full catalog, in ascending risk order
    pub const ALL: [FundKind; 3] = [FundKind::Conservative, FundKind::Balanced, FundKind::Growth];

    pub fn as_str(&self) -> &'static str {
        match self {
            FundKind::Conservative => "Conservative",
            FundKind::Balanced => "Balanced",
            FundKind::Growth => "Growth",
        }
    }

    /// Parse the CSV column value; `None` for anything outside the catalog
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Conservative" => Some(FundKind::Conservative),
            "Balanced" => Some(FundKind::Balanced),
            "Growth" => Some(FundKind::Growth),
            _ => None,
        }
    }
}

impl fmt::Display for FundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative risk tier, used both for the insufficiency classification
/// on affiliates and for the risk level of a fund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(RiskLevel::Low),
            "Medium" => Some(RiskLevel::Medium),
            "High" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marital status of the affiliate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Single" => Some(MaritalStatus::Single),
            "Married" => Some(MaritalStatus::Married),
            "Divorced" => Some(MaritalStatus::Divorced),
            "Widowed" => Some(MaritalStatus::Widowed),
            _ => None,
        }
    }
}

/// Highest education level recorded for the affiliate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    HighSchool,
    University,
    Postgraduate,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "HighSchool",
            EducationLevel::University => "University",
            EducationLevel::Postgraduate => "Postgraduate",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HighSchool" => Some(EducationLevel::HighSchool),
            "University" => Some(EducationLevel::University),
            "Postgraduate" => Some(EducationLevel::Postgraduate),
            _ => None,
        }
    }
}

/// An individual enrolled in the pension scheme
///
/// Loaded once per session from `affiliates.csv` and treated as immutable
/// reference data thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Affiliate {
    /// Unique affiliate identifier
    pub id: u32,

    /// Full name
    pub name: String,

    /// Current age in years
    pub age: u8,

    /// Current monthly salary
    pub monthly_salary: f64,

    /// Years of mandatory contributions accumulated
    pub years_contributed: u32,

    /// Marital status
    pub marital_status: MaritalStatus,

    /// Number of children
    pub children: u8,

    /// Highest education level
    pub education: EducationLevel,

    /// Qualitative risk that the projected pension is insufficient
    pub insufficiency_risk: RiskLevel,

    /// Fund the affiliate's balance is currently invested in
    pub current_fund: FundKind,
}

impl Affiliate {
    /// Years until the statutory retirement age (negative once past it)
    pub fn years_to_retirement(&self) -> i32 {
        i32::from(STATUTORY_RETIREMENT_AGE) - i32::from(self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_kind_parse_round_trip() {
        for kind in FundKind::ALL {
            assert_eq!(FundKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FundKind::parse("Aggressive"), None);
    }

    #[test]
    fn test_risk_level_parse() {
        assert_eq!(RiskLevel::parse("High"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::parse("high"), None);
    }

    #[test]
    fn test_years_to_retirement() {
        let affiliate = Affiliate {
            id: 1,
            name: "Test".to_string(),
            age: 60,
            monthly_salary: 15_000.0,
            years_contributed: 35,
            marital_status: MaritalStatus::Married,
            children: 1,
            education: EducationLevel::University,
            insufficiency_risk: RiskLevel::High,
            current_fund: FundKind::Conservative,
        };
        assert_eq!(affiliate.years_to_retirement(), 5);
    }
}
