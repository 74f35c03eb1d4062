//! Pension forecasting from personal financial parameters

mod engine;
mod schedule;

pub use engine::{ForecastEngine, ForecastInput, ForecastParams};
pub use schedule::{ForecastResult, SchedulePoint};
