//! Investment fund catalog

use super::{FundKind, RiskLevel};
use serde::{Deserialize, Serialize};

/// One entry of the static three-fund catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fund {
    /// Which catalog tier this entry describes
    pub kind: FundKind,

    /// Expected annual return, percent
    pub annual_return_pct: f64,

    /// Risk level of the fund
    pub risk: RiskLevel,

    /// Annual management fee, percent
    pub annual_fee_pct: f64,

    /// Investor profile the fund is recommended for
    pub recommended_profile: String,

    /// Trailing five-year cumulative return, percent
    pub five_year_return_pct: f64,
}
