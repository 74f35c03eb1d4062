//! Forecast output structures

use serde::{Deserialize, Serialize};

/// One point of the year-by-year pension schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SchedulePoint {
    /// Age of the affiliate at this point
    pub age: u8,

    /// Projected monthly pension if retiring at this age
    pub projected_pension: f64,
}

/// Complete forecast result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Pension accrued from mandatory contributions
    pub base_pension: f64,

    /// Pension accrued from voluntary contributions up to retirement
    pub contribution_pension: f64,

    /// Projected monthly pension at the planned retirement age, 2 decimals
    pub projected_pension: f64,

    /// Whether the projected pension falls below the sufficiency threshold
    pub insufficient: bool,

    /// Year-by-year schedule from current age to retirement age inclusive
    pub schedule: Vec<SchedulePoint>,
}

impl ForecastResult {
    /// Number of years covered by the schedule (remaining years + 1)
    pub fn schedule_len(&self) -> usize {
        self.schedule.len()
    }

    /// The schedule point at the planned retirement age
    pub fn final_point(&self) -> Option<&SchedulePoint> {
        self.schedule.last()
    }
}
