//! Dataset provisioning, loading and the in-memory table container
//!
//! The four tables are loaded once per session and validated together; a
//! `Dataset` can only exist with the referential invariants intact, so the
//! computation modules never observe partial or unloaded data.

pub mod loader;
pub mod seed;

use crate::error::{PensionError, PensionResult};
use crate::records::{Affiliate, Fund, FundKind, PensionProjection, Transaction};
use log::info;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Default directory holding the four dataset CSVs
pub const DEFAULT_DATA_PATH: &str = "data";

pub const AFFILIATES_FILE: &str = "affiliates.csv";
pub const PROJECTIONS_FILE: &str = "projections.csv";
pub const FUNDS_FILE: &str = "funds.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";

/// An affiliate joined with their stored pension projection (1:1)
#[derive(Debug, Clone, Copy)]
pub struct AffiliateProfile<'a> {
    pub affiliate: &'a Affiliate,
    pub projection: &'a PensionProjection,
}

/// Immutable in-memory container for the four loaded tables
#[derive(Debug, Clone)]
pub struct Dataset {
    affiliates: Vec<Affiliate>,
    projections: Vec<PensionProjection>,
    funds: Vec<Fund>,
    transactions: Vec<Transaction>,
}

impl Dataset {
    /// Build a dataset from already-loaded tables, validating every
    /// referential invariant; any violation is fatal
    pub fn from_tables(
        affiliates: Vec<Affiliate>,
        projections: Vec<PensionProjection>,
        funds: Vec<Fund>,
        transactions: Vec<Transaction>,
    ) -> PensionResult<Self> {
        let dataset = Self {
            affiliates,
            projections,
            funds,
            transactions,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load all four tables from CSV files in `dir`
    pub fn from_csv_path<P: AsRef<Path>>(dir: P) -> PensionResult<Self> {
        let dir = dir.as_ref();
        let dataset = Self::from_tables(
            loader::load_affiliates(dir.join(AFFILIATES_FILE))?,
            loader::load_projections(dir.join(PROJECTIONS_FILE))?,
            loader::load_funds(dir.join(FUNDS_FILE))?,
            loader::load_transactions(dir.join(TRANSACTIONS_FILE))?,
        )?;
        info!(
            "loaded {} affiliates, {} projections, {} funds, {} transactions from {}",
            dataset.affiliates.len(),
            dataset.projections.len(),
            dataset.funds.len(),
            dataset.transactions.len(),
            dir.display()
        );
        Ok(dataset)
    }

    /// Synthesize any absent dataset files in `dir`, then load
    pub fn provision_and_load<P: AsRef<Path>>(dir: P) -> PensionResult<Self> {
        seed::provision(&dir)?;
        Self::from_csv_path(dir)
    }

    /// The demonstration tables fully in memory, no file I/O
    ///
    /// The fixed rows satisfy every load invariant.
    pub fn demo() -> Self {
        Self {
            affiliates: seed::demo_affiliates(),
            projections: seed::demo_projections(),
            funds: seed::demo_funds(),
            transactions: seed::demo_transactions(),
        }
    }

    fn validate(&self) -> PensionResult<()> {
        if self.affiliates.is_empty() {
            return Err(PensionError::EmptyTable("affiliates"));
        }
        if self.projections.is_empty() {
            return Err(PensionError::EmptyTable("projections"));
        }
        if self.funds.is_empty() {
            return Err(PensionError::EmptyTable("funds"));
        }

        let mut ids = HashSet::new();
        for affiliate in &self.affiliates {
            if !ids.insert(affiliate.id) {
                return Err(PensionError::DuplicateAffiliate(affiliate.id));
            }
        }

        let mut projected = HashSet::new();
        for projection in &self.projections {
            if !ids.contains(&projection.affiliate_id) {
                return Err(PensionError::UnknownAffiliate {
                    table: "projections",
                    affiliate_id: projection.affiliate_id,
                });
            }
            if !projected.insert(projection.affiliate_id) {
                return Err(PensionError::DuplicateProjection(projection.affiliate_id));
            }
        }
        for affiliate in &self.affiliates {
            if !projected.contains(&affiliate.id) {
                return Err(PensionError::MissingProjection(affiliate.id));
            }
        }

        let mut catalog = HashSet::new();
        for fund in &self.funds {
            if !catalog.insert(fund.kind) {
                return Err(PensionError::BadFundCatalog(format!(
                    "{} listed more than once",
                    fund.kind
                )));
            }
        }
        for kind in FundKind::ALL {
            if !catalog.contains(&kind) {
                return Err(PensionError::BadFundCatalog(format!("{kind} is missing")));
            }
        }

        for transaction in &self.transactions {
            if !ids.contains(&transaction.affiliate_id) {
                return Err(PensionError::UnknownAffiliate {
                    table: "transactions",
                    affiliate_id: transaction.affiliate_id,
                });
            }
        }

        Ok(())
    }

    pub fn affiliates(&self) -> &[Affiliate] {
        &self.affiliates
    }

    pub fn projections(&self) -> &[PensionProjection] {
        &self.projections
    }

    pub fn funds(&self) -> &[Fund] {
        &self.funds
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up an affiliate by id
    pub fn affiliate(&self, id: u32) -> Option<&Affiliate> {
        self.affiliates.iter().find(|a| a.id == id)
    }

    /// Look up the stored projection for an affiliate
    pub fn projection_for(&self, affiliate_id: u32) -> Option<&PensionProjection> {
        self.projections
            .iter()
            .find(|p| p.affiliate_id == affiliate_id)
    }

    /// Look up a fund catalog entry
    pub fn fund(&self, kind: FundKind) -> Option<&Fund> {
        self.funds.iter().find(|f| f.kind == kind)
    }

    /// All transactions for one affiliate, in log order
    pub fn transactions_for(&self, affiliate_id: u32) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.affiliate_id == affiliate_id)
            .collect()
    }

    /// The 1:1 affiliate/projection join, in affiliate table order
    pub fn profiles(&self) -> Vec<AffiliateProfile<'_>> {
        let by_id: HashMap<u32, &PensionProjection> = self
            .projections
            .iter()
            .map(|p| (p.affiliate_id, p))
            .collect();

        self.affiliates
            .iter()
            .filter_map(|affiliate| {
                by_id.get(&affiliate.id).copied().map(|projection| AffiliateProfile {
                    affiliate,
                    projection,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{EducationLevel, MaritalStatus, RiskLevel};

    fn one_affiliate() -> Affiliate {
        Affiliate {
            id: 1,
            name: "Test".to_string(),
            age: 45,
            monthly_salary: 25_000.0,
            years_contributed: 15,
            marital_status: MaritalStatus::Married,
            children: 2,
            education: EducationLevel::University,
            insufficiency_risk: RiskLevel::Medium,
            current_fund: FundKind::Balanced,
        }
    }

    fn one_projection(affiliate_id: u32) -> PensionProjection {
        PensionProjection {
            affiliate_id,
            retirement_age: 65,
            base_pension: 12_500.0,
            optimistic_pension: 14_500.0,
            pessimistic_pension: 10_500.0,
            recommendation: "Maintain current contribution".to_string(),
        }
    }

    #[test]
    fn test_demo_dataset_is_valid() {
        let dataset = Dataset::demo();
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.affiliates().len(), 10);
        assert_eq!(dataset.profiles().len(), 10);
    }

    #[test]
    fn test_empty_affiliates_is_fatal() {
        let err = Dataset::from_tables(
            Vec::new(),
            vec![one_projection(1)],
            seed::demo_funds(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, PensionError::EmptyTable("affiliates")));
    }

    #[test]
    fn test_orphan_projection_is_fatal() {
        let err = Dataset::from_tables(
            vec![one_affiliate()],
            vec![one_projection(99)],
            seed::demo_funds(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PensionError::UnknownAffiliate {
                table: "projections",
                affiliate_id: 99
            }
        ));
    }

    #[test]
    fn test_missing_projection_is_fatal() {
        let mut second = one_affiliate();
        second.id = 2;
        let err = Dataset::from_tables(
            vec![one_affiliate(), second],
            vec![one_projection(1)],
            seed::demo_funds(),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, PensionError::MissingProjection(2)));
    }

    #[test]
    fn test_orphan_transaction_is_fatal() {
        let mut transactions = seed::demo_transactions();
        transactions[0].affiliate_id = 42;
        let err = Dataset::from_tables(
            vec![one_affiliate()],
            vec![one_projection(1)],
            seed::demo_funds(),
            transactions,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PensionError::UnknownAffiliate {
                table: "transactions",
                ..
            }
        ));
    }

    #[test]
    fn test_incomplete_fund_catalog_is_fatal() {
        let mut funds = seed::demo_funds();
        funds.pop();
        let err = Dataset::from_tables(
            vec![one_affiliate()],
            vec![one_projection(1)],
            funds,
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, PensionError::BadFundCatalog(_)));
    }

    #[test]
    fn test_empty_transaction_log_is_valid() {
        let dataset = Dataset::from_tables(
            vec![one_affiliate()],
            vec![one_projection(1)],
            seed::demo_funds(),
            Vec::new(),
        )
        .unwrap();
        assert!(dataset.transactions_for(1).is_empty());
    }

    #[test]
    fn test_lookups() {
        let dataset = Dataset::demo();
        assert_eq!(dataset.affiliate(5).map(|a| a.age), Some(60));
        assert_eq!(dataset.projection_for(5).map(|p| p.base_pension), Some(7_000.0));
        assert_eq!(dataset.transactions_for(1).len(), 2);
        assert_eq!(dataset.transactions_for(10).len(), 0);
        assert!(dataset.fund(FundKind::Growth).is_some());
    }
}
