//! Crate-wide error taxonomy
//!
//! Load-time failures (missing files, malformed rows, broken references) are
//! fatal; the system never proceeds with partial tables. Empty scan results
//! are not errors and never appear here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PensionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown {column} value in {table}: {value}")]
    UnknownValue {
        table: &'static str,
        column: &'static str,
        value: String,
    },

    #[error("{table} row references unknown affiliate {affiliate_id}")]
    UnknownAffiliate {
        table: &'static str,
        affiliate_id: u32,
    },

    #[error("Duplicate affiliate id {0}")]
    DuplicateAffiliate(u32),

    #[error("Affiliate {0} has no pension projection")]
    MissingProjection(u32),

    #[error("Affiliate {0} has more than one pension projection")]
    DuplicateProjection(u32),

    #[error("Invalid fund catalog: {0}")]
    BadFundCatalog(String),

    #[error("No rows loaded for table {0}")]
    EmptyTable(&'static str),

    #[error("Affiliate {0} not found")]
    AffiliateNotFound(u32),

    #[error("Retirement age {retirement_age} is below current age {current_age}")]
    RetirementBeforeCurrentAge {
        current_age: u8,
        retirement_age: u8,
    },

    #[error("Forecast input {0} must not be negative")]
    NegativeForecastInput(&'static str),
}

pub type PensionResult<T> = Result<T, PensionError>;
