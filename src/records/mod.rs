//! Entity types for the four loaded tables

mod affiliate;
mod fund;
mod projection;
mod transaction;

pub use affiliate::{
    Affiliate, EducationLevel, FundKind, MaritalStatus, RiskLevel, STATUTORY_RETIREMENT_AGE,
};
pub use fund::Fund;
pub use projection::PensionProjection;
pub use transaction::{Transaction, TransactionKind};
