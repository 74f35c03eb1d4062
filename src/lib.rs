//! Pension System - projection and compliance analytics for a retirement-savings administrator
//!
//! This library provides:
//! - Dataset provisioning and loading (four CSV tables, demonstration data when absent)
//! - Pension forecasting from personal parameters with a year-by-year schedule
//! - Fund suitability evaluation and personalized advisory content
//! - Compliance scans (fund/age alignment, pension sufficiency, atypical contributions)
//! - Dashboard analytics and a batch forecast runner

pub mod advisory;
pub mod analytics;
pub mod compliance;
pub mod dataset;
pub mod error;
pub mod forecast;
pub mod records;
pub mod scenario;

// Re-export commonly used types
pub use compliance::ComplianceReport;
pub use dataset::Dataset;
pub use error::{PensionError, PensionResult};
pub use forecast::{ForecastEngine, ForecastInput, ForecastResult};
pub use records::{Affiliate, Fund, FundKind, PensionProjection, RiskLevel, Transaction};
pub use scenario::ForecastRunner;
