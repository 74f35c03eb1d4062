//! Closed-form pension forecast engine
//!
//! Projects a monthly pension from personal financial parameters. The
//! formula is linear in elapsed years: mandatory accrual scales with salary
//! and contributed years, voluntary contributions accumulate with a fixed
//! uplift, and expected salary growth scales the combined total.

use super::schedule::{ForecastResult, SchedulePoint};
use crate::error::{PensionError, PensionResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Personal parameters for one forecast
#[derive(Debug, Clone, Copy)]
pub struct ForecastInput {
    /// Current age in years
    pub current_age: u8,

    /// Current monthly salary
    pub monthly_salary: f64,

    /// Years of mandatory contributions accumulated so far
    pub years_contributed: u32,

    /// Planned monthly voluntary contribution until retirement
    pub monthly_contribution: f64,

    /// Estimated annual salary growth rate, percent
    pub salary_growth_pct: f64,

    /// Planned retirement age
    pub retirement_age: u8,
}

impl ForecastInput {
    /// Reject inputs the formula is undefined for
    ///
    /// A retirement age below the current age would produce a negative
    /// pension; negative amounts are precondition violations as well.
    pub fn validate(&self) -> PensionResult<()> {
        if self.retirement_age < self.current_age {
            return Err(PensionError::RetirementBeforeCurrentAge {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }
        if self.monthly_salary < 0.0 {
            return Err(PensionError::NegativeForecastInput("monthly_salary"));
        }
        if self.monthly_contribution < 0.0 {
            return Err(PensionError::NegativeForecastInput("monthly_contribution"));
        }
        if self.salary_growth_pct < 0.0 {
            return Err(PensionError::NegativeForecastInput("salary_growth_pct"));
        }
        Ok(())
    }

    /// Years between now and the planned retirement age
    pub fn remaining_years(&self) -> u32 {
        u32::from(self.retirement_age.saturating_sub(self.current_age))
    }
}

/// Tunable parameters of the forecast formula
#[derive(Debug, Clone, Copy)]
pub struct ForecastParams {
    /// Fraction of salary accrued per contributed year
    pub accrual_rate: f64,

    /// Uplift applied to accumulated voluntary contributions
    pub contribution_uplift: f64,

    /// Pension below this fraction of salary is classified insufficient
    pub insufficiency_threshold: f64,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            accrual_rate: 0.05,
            contribution_uplift: 1.03,
            insufficiency_threshold: 0.40,
        }
    }
}

/// Pension forecast engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastEngine {
    params: ForecastParams,
}

impl ForecastEngine {
    /// Create an engine with specific formula parameters
    pub fn new(params: ForecastParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ForecastParams {
        &self.params
    }

    /// Run the forecast for one set of inputs
    ///
    /// Deterministic; the full schedule is recomputed on every invocation.
    pub fn project(&self, input: &ForecastInput) -> PensionResult<ForecastResult> {
        input.validate()?;

        let p = &self.params;
        let years = f64::from(input.remaining_years());
        let growth = input.salary_growth_pct / 100.0;

        let base_pension = input.monthly_salary * f64::from(input.years_contributed) * p.accrual_rate;
        let contribution_pension =
            input.monthly_contribution * MONTHS_PER_YEAR * years * p.contribution_uplift;
        let projected_pension =
            round_currency((base_pension + contribution_pension) * (1.0 + growth * years));

        let insufficient = projected_pension < p.insufficiency_threshold * input.monthly_salary;

        // Per-year points scale each component linearly with elapsed years;
        // growth applies to the accrued base only, not to the contributions
        let schedule = (0..=input.remaining_years())
            .map(|elapsed| {
                let k = f64::from(elapsed);
                let value = base_pension * (1.0 + growth * k)
                    + input.monthly_contribution * MONTHS_PER_YEAR * k * p.contribution_uplift;
                SchedulePoint {
                    age: input.current_age.saturating_add(elapsed as u8),
                    projected_pension: round_currency(value),
                }
            })
            .collect();

        Ok(ForecastResult {
            base_pension,
            contribution_pension,
            projected_pension,
            insufficient,
            schedule,
        })
    }
}

/// Round to 2 decimal places (currency output)
fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_input() -> ForecastInput {
        ForecastInput {
            current_age: 40,
            monthly_salary: 25_000.0,
            years_contributed: 10,
            monthly_contribution: 1_000.0,
            salary_growth_pct: 3.5,
            retirement_age: 65,
        }
    }

    #[test]
    fn test_reference_projection() {
        let result = ForecastEngine::default()
            .project(&reference_input())
            .unwrap();

        // 12500 base + 309000 contributions, grown by 1.875
        assert_relative_eq!(result.base_pension, 12_500.0);
        assert_relative_eq!(result.contribution_pension, 309_000.0);
        assert_relative_eq!(result.projected_pension, 602_812.50);
        assert!(!result.insufficient);
    }

    #[test]
    fn test_schedule_shape() {
        let result = ForecastEngine::default()
            .project(&reference_input())
            .unwrap();

        assert_eq!(result.schedule_len(), 26);
        assert_eq!(result.schedule[0].age, 40);
        assert_eq!(result.final_point().map(|p| p.age), Some(65));

        // Elapsed zero years: only the accrued base
        assert_relative_eq!(result.schedule[0].projected_pension, 12_500.0);

        // Monotone under non-negative growth and contributions
        for pair in result.schedule.windows(2) {
            assert!(pair[1].projected_pension >= pair[0].projected_pension);
        }
    }

    #[test]
    fn test_retirement_before_current_age_rejected() {
        let input = ForecastInput {
            current_age: 66,
            retirement_age: 65,
            ..reference_input()
        };
        let err = ForecastEngine::default().project(&input).unwrap_err();
        assert!(matches!(
            err,
            PensionError::RetirementBeforeCurrentAge {
                current_age: 66,
                retirement_age: 65
            }
        ));
    }

    #[test]
    fn test_negative_contribution_rejected() {
        let input = ForecastInput {
            monthly_contribution: -100.0,
            ..reference_input()
        };
        assert!(ForecastEngine::default().project(&input).is_err());
    }

    #[test]
    fn test_retiring_now_yields_base_only() {
        let input = ForecastInput {
            current_age: 65,
            retirement_age: 65,
            ..reference_input()
        };
        let result = ForecastEngine::default().project(&input).unwrap();
        assert_relative_eq!(result.projected_pension, 12_500.0);
        assert_eq!(result.schedule_len(), 1);
    }

    #[test]
    fn test_insufficiency_boundary_is_strict() {
        // Exactly 40% of salary is NOT insufficient
        let input = ForecastInput {
            current_age: 65,
            monthly_salary: 25_000.0,
            years_contributed: 8,
            monthly_contribution: 0.0,
            salary_growth_pct: 0.0,
            retirement_age: 65,
        };
        let result = ForecastEngine::default().project(&input).unwrap();
        assert_relative_eq!(result.projected_pension, 10_000.0);
        assert!(!result.insufficient);

        // Just below the threshold flips the flag
        let input = ForecastInput {
            years_contributed: 7,
            ..input
        };
        let result = ForecastEngine::default().project(&input).unwrap();
        assert!(result.insufficient);
    }

    #[test]
    fn test_projection_is_non_negative() {
        for years in [0u32, 5, 20, 40] {
            let input = ForecastInput {
                current_age: 25,
                retirement_age: 25 + years as u8,
                ..reference_input()
            };
            let result = ForecastEngine::default().project(&input).unwrap();
            assert!(result.projected_pension >= 0.0);
        }
    }
}
