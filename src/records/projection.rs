//! Stored pension projections, one per affiliate

use serde::{Deserialize, Serialize};

/// Forecast of the retirement pension under base, optimistic and pessimistic
/// scenarios, keyed 1:1 to an affiliate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PensionProjection {
    /// Affiliate this projection belongs to
    pub affiliate_id: u32,

    /// Assumed retirement age for the projection
    pub retirement_age: u8,

    /// Projected monthly pension under the base scenario
    pub base_pension: f64,

    /// Projected monthly pension under the optimistic scenario
    pub optimistic_pension: f64,

    /// Projected monthly pension under the pessimistic scenario
    pub pessimistic_pension: f64,

    /// Free-text contribution recommendation for the affiliate
    pub recommendation: String,
}
