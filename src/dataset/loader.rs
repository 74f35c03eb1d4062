//! Per-table CSV loaders
//!
//! Each loader reads one of the four dataset files. Closed-enumeration
//! columns are parsed strictly: an unknown value aborts the load, it is
//! never skipped or defaulted.

use crate::error::{PensionError, PensionResult};
use crate::records::{
    Affiliate, EducationLevel, Fund, FundKind, MaritalStatus, PensionProjection, RiskLevel,
    Transaction, TransactionKind,
};
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;

fn unknown(table: &'static str, column: &'static str, value: &str) -> PensionError {
    PensionError::UnknownValue {
        table,
        column,
        value: value.to_string(),
    }
}

/// Raw CSV row matching affiliates.csv columns
#[derive(Debug, serde::Deserialize)]
struct AffiliateRow {
    id: u32,
    name: String,
    age: u8,
    monthly_salary: f64,
    years_contributed: u32,
    marital_status: String,
    children: u8,
    education: String,
    insufficiency_risk: String,
    current_fund: String,
}

impl AffiliateRow {
    fn into_affiliate(self) -> PensionResult<Affiliate> {
        let marital_status = MaritalStatus::parse(&self.marital_status)
            .ok_or_else(|| unknown("affiliates", "marital_status", &self.marital_status))?;
        let education = EducationLevel::parse(&self.education)
            .ok_or_else(|| unknown("affiliates", "education", &self.education))?;
        let insufficiency_risk = RiskLevel::parse(&self.insufficiency_risk)
            .ok_or_else(|| unknown("affiliates", "insufficiency_risk", &self.insufficiency_risk))?;
        let current_fund = FundKind::parse(&self.current_fund)
            .ok_or_else(|| unknown("affiliates", "current_fund", &self.current_fund))?;

        Ok(Affiliate {
            id: self.id,
            name: self.name,
            age: self.age,
            monthly_salary: self.monthly_salary,
            years_contributed: self.years_contributed,
            marital_status,
            children: self.children,
            education,
            insufficiency_risk,
            current_fund,
        })
    }
}

/// Raw CSV row matching projections.csv columns
#[derive(Debug, serde::Deserialize)]
struct ProjectionRow {
    affiliate_id: u32,
    retirement_age: u8,
    base_projected_pension: f64,
    optimistic_projection: f64,
    pessimistic_projection: f64,
    contribution_recommendation: String,
}

impl ProjectionRow {
    fn into_projection(self) -> PensionProjection {
        PensionProjection {
            affiliate_id: self.affiliate_id,
            retirement_age: self.retirement_age,
            base_pension: self.base_projected_pension,
            optimistic_pension: self.optimistic_projection,
            pessimistic_pension: self.pessimistic_projection,
            recommendation: self.contribution_recommendation,
        }
    }
}

/// Raw CSV row matching funds.csv columns
#[derive(Debug, serde::Deserialize)]
struct FundRow {
    name: String,
    annual_return_pct: f64,
    risk_level: String,
    annual_fee_pct: f64,
    recommended_profile: String,
    five_year_return_pct: f64,
}

impl FundRow {
    fn into_fund(self) -> PensionResult<Fund> {
        let kind =
            FundKind::parse(&self.name).ok_or_else(|| unknown("funds", "name", &self.name))?;
        let risk = RiskLevel::parse(&self.risk_level)
            .ok_or_else(|| unknown("funds", "risk_level", &self.risk_level))?;

        Ok(Fund {
            kind,
            annual_return_pct: self.annual_return_pct,
            risk,
            annual_fee_pct: self.annual_fee_pct,
            recommended_profile: self.recommended_profile,
            five_year_return_pct: self.five_year_return_pct,
        })
    }
}

/// Raw CSV row matching transactions.csv columns
#[derive(Debug, serde::Deserialize)]
struct TransactionRow {
    affiliate_id: u32,
    date: NaiveDate,
    amount: f64,
    #[serde(rename = "type")]
    kind: String,
    concept: String,
}

impl TransactionRow {
    fn into_transaction(self) -> PensionResult<Transaction> {
        let kind = TransactionKind::parse(&self.kind)
            .ok_or_else(|| unknown("transactions", "type", &self.kind))?;

        Ok(Transaction {
            affiliate_id: self.affiliate_id,
            date: self.date,
            amount: self.amount,
            kind,
            concept: self.concept,
        })
    }
}

/// Load all affiliates from a CSV file
pub fn load_affiliates<P: AsRef<Path>>(path: P) -> PensionResult<Vec<Affiliate>> {
    load_affiliates_from_reader(std::fs::File::open(path)?)
}

/// Load affiliates from any reader (e.g., string buffer)
pub fn load_affiliates_from_reader<R: std::io::Read>(reader: R) -> PensionResult<Vec<Affiliate>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut affiliates = Vec::new();

    for result in csv_reader.deserialize() {
        let row: AffiliateRow = result?;
        affiliates.push(row.into_affiliate()?);
    }

    Ok(affiliates)
}

/// Load all stored projections from a CSV file
pub fn load_projections<P: AsRef<Path>>(path: P) -> PensionResult<Vec<PensionProjection>> {
    load_projections_from_reader(std::fs::File::open(path)?)
}

/// Load stored projections from any reader
pub fn load_projections_from_reader<R: std::io::Read>(
    reader: R,
) -> PensionResult<Vec<PensionProjection>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut projections = Vec::new();

    for result in csv_reader.deserialize() {
        let row: ProjectionRow = result?;
        projections.push(row.into_projection());
    }

    Ok(projections)
}

/// Load the fund catalog from a CSV file
pub fn load_funds<P: AsRef<Path>>(path: P) -> PensionResult<Vec<Fund>> {
    load_funds_from_reader(std::fs::File::open(path)?)
}

/// Load the fund catalog from any reader
pub fn load_funds_from_reader<R: std::io::Read>(reader: R) -> PensionResult<Vec<Fund>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut funds = Vec::new();

    for result in csv_reader.deserialize() {
        let row: FundRow = result?;
        funds.push(row.into_fund()?);
    }

    Ok(funds)
}

/// Load the transaction log from a CSV file
pub fn load_transactions<P: AsRef<Path>>(path: P) -> PensionResult<Vec<Transaction>> {
    load_transactions_from_reader(std::fs::File::open(path)?)
}

/// Load the transaction log from any reader
pub fn load_transactions_from_reader<R: std::io::Read>(
    reader: R,
) -> PensionResult<Vec<Transaction>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut transactions = Vec::new();

    for result in csv_reader.deserialize() {
        let row: TransactionRow = result?;
        transactions.push(row.into_transaction()?);
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_affiliates_from_reader() {
        let data = "\
id,name,age,monthly_salary,years_contributed,marital_status,children,education,insufficiency_risk,current_fund
1,Juan Perez,45,25000,15,Married,2,University,Medium,Balanced
2,Maria Garcia,38,32000,10,Single,0,University,Low,Growth
";
        let affiliates = load_affiliates_from_reader(data.as_bytes()).unwrap();
        assert_eq!(affiliates.len(), 2);
        assert_eq!(affiliates[0].id, 1);
        assert_eq!(affiliates[0].current_fund, FundKind::Balanced);
        assert_eq!(affiliates[1].insufficiency_risk, RiskLevel::Low);
    }

    #[test]
    fn test_unknown_fund_is_fatal() {
        let data = "\
id,name,age,monthly_salary,years_contributed,marital_status,children,education,insufficiency_risk,current_fund
1,Juan Perez,45,25000,15,Married,2,University,Medium,Aggressive
";
        let err = load_affiliates_from_reader(data.as_bytes()).unwrap_err();
        match err {
            PensionError::UnknownValue { table, column, value } => {
                assert_eq!(table, "affiliates");
                assert_eq!(column, "current_fund");
                assert_eq!(value, "Aggressive");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_transactions_parses_dates() {
        let data = "\
affiliate_id,date,amount,type,concept
1,2024-01-15,2500,Contribution,Voluntary
1,2024-02-18,2500,Contribution,Voluntary
";
        let transactions = load_transactions_from_reader(data.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(
            transactions[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(transactions[0].kind, TransactionKind::Contribution);
    }

    #[test]
    fn test_malformed_amount_is_fatal() {
        let data = "\
affiliate_id,date,amount,type,concept
1,2024-01-15,not-a-number,Contribution,Voluntary
";
        assert!(load_transactions_from_reader(data.as_bytes()).is_err());
    }
}
