//! Forecast runner for efficient batch runs
//!
//! Loads the dataset once, then allows running many forecasts (per
//! affiliate, or across growth-rate scenarios) without re-reading CSV
//! files. Source data is static per session, so the one-time load doubles
//! as the cache.

use crate::dataset::Dataset;
use crate::error::{PensionError, PensionResult};
use crate::forecast::{ForecastEngine, ForecastInput, ForecastResult};
use std::path::Path;

/// A forecast produced for one stored affiliate
#[derive(Debug, Clone)]
pub struct AffiliateForecast {
    pub affiliate_id: u32,
    pub name: String,
    pub result: ForecastResult,
}

/// Pre-loaded runner for batch forecasts
#[derive(Debug, Clone)]
pub struct ForecastRunner {
    dataset: Dataset,
    engine: ForecastEngine,
}

impl ForecastRunner {
    /// Create a runner over an already-loaded dataset
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            engine: ForecastEngine::default(),
        }
    }

    /// Create a runner with a specific engine
    pub fn with_engine(dataset: Dataset, engine: ForecastEngine) -> Self {
        Self { dataset, engine }
    }

    /// Create a runner over the in-memory demonstration dataset
    pub fn demo() -> Self {
        Self::new(Dataset::demo())
    }

    /// Create a runner by loading the dataset from a directory
    pub fn from_csv_path<P: AsRef<Path>>(dir: P) -> PensionResult<Self> {
        Ok(Self::new(Dataset::from_csv_path(dir)?))
    }

    /// Get a reference to the loaded dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Run a single forecast
    pub fn run(&self, input: &ForecastInput) -> PensionResult<ForecastResult> {
        self.engine.project(input)
    }

    /// Build the forecast input for a stored affiliate
    ///
    /// Salary, age and contributed years come from the affiliate record;
    /// the retirement age comes from their stored projection.
    pub fn input_for(
        &self,
        affiliate_id: u32,
        monthly_contribution: f64,
        salary_growth_pct: f64,
    ) -> PensionResult<ForecastInput> {
        let affiliate = self
            .dataset
            .affiliate(affiliate_id)
            .ok_or(PensionError::AffiliateNotFound(affiliate_id))?;
        let projection = self
            .dataset
            .projection_for(affiliate_id)
            .ok_or(PensionError::AffiliateNotFound(affiliate_id))?;

        Ok(ForecastInput {
            current_age: affiliate.age,
            monthly_salary: affiliate.monthly_salary,
            years_contributed: affiliate.years_contributed,
            monthly_contribution,
            salary_growth_pct,
            retirement_age: projection.retirement_age,
        })
    }

    /// Run the forecast for one stored affiliate
    pub fn run_affiliate(
        &self,
        affiliate_id: u32,
        monthly_contribution: f64,
        salary_growth_pct: f64,
    ) -> PensionResult<ForecastResult> {
        let input = self.input_for(affiliate_id, monthly_contribution, salary_growth_pct)?;
        self.engine.project(&input)
    }

    /// Run forecasts for every stored affiliate with the same assumptions
    pub fn run_batch(
        &self,
        monthly_contribution: f64,
        salary_growth_pct: f64,
    ) -> PensionResult<Vec<AffiliateForecast>> {
        self.dataset
            .affiliates()
            .iter()
            .map(|a| {
                self.run_affiliate(a.id, monthly_contribution, salary_growth_pct)
                    .map(|result| AffiliateForecast {
                        affiliate_id: a.id,
                        name: a.name.clone(),
                        result,
                    })
            })
            .collect()
    }

    /// Run one input across several growth-rate scenarios
    pub fn run_scenarios(
        &self,
        input: &ForecastInput,
        growth_rates_pct: &[f64],
    ) -> PensionResult<Vec<ForecastResult>> {
        growth_rates_pct
            .iter()
            .map(|&salary_growth_pct| {
                self.engine.project(&ForecastInput {
                    salary_growth_pct,
                    ..*input
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_batch_covers_all_affiliates() {
        let runner = ForecastRunner::demo();
        let forecasts = runner.run_batch(1_000.0, 3.5).unwrap();
        assert_eq!(forecasts.len(), 10);
        assert!(forecasts.iter().all(|f| f.result.projected_pension > 0.0));
    }

    #[test]
    fn test_run_affiliate_uses_stored_profile() {
        let runner = ForecastRunner::demo();
        // Juan Perez: age 45, salary 25000, 15 years contributed, retires at 65
        let result = runner.run_affiliate(1, 0.0, 0.0).unwrap();
        assert!((result.base_pension - 18_750.0).abs() < 1e-9);
        assert_eq!(result.schedule_len(), 21);
    }

    #[test]
    fn test_unknown_affiliate_is_an_error() {
        let runner = ForecastRunner::demo();
        let err = runner.run_affiliate(42, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, PensionError::AffiliateNotFound(42)));
    }

    #[test]
    fn test_scenarios_rank_by_growth() {
        let runner = ForecastRunner::demo();
        let input = runner.input_for(1, 1_000.0, 0.0).unwrap();
        let results = runner.run_scenarios(&input, &[0.0, 3.0, 5.0]).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results[2].projected_pension > results[0].projected_pension);
    }
}
