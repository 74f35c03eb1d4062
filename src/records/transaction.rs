//! Voluntary contribution transaction log

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of movement recorded in the transaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Voluntary deposit beyond mandatory payroll deductions
    Contribution,
    /// Withdrawal of previously deposited funds
    Withdrawal,
    /// Administrative correction
    Adjustment,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Contribution => "Contribution",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Adjustment => "Adjustment",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Contribution" => Some(TransactionKind::Contribution),
            "Withdrawal" => Some(TransactionKind::Withdrawal),
            "Adjustment" => Some(TransactionKind::Adjustment),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the append-only transaction log (many per affiliate)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Affiliate the movement belongs to
    pub affiliate_id: u32,

    /// Value date of the movement
    pub date: NaiveDate,

    /// Amount moved
    pub amount: f64,

    /// Kind of movement
    pub kind: TransactionKind,

    /// Free-text concept
    pub concept: String,
}
