use chrono::Utc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::fund::{FundTerms, InvestmentType, MutualFund};
use crate::models::ledger::Ledger;

/// Manages the mutual-fund records in a ledger: insert, update, delete,
/// lookup. Current value is user-entered and stored as-is — there is no
/// market-data fetch and no accrual math on this side.
pub struct FundService;

impl FundService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and insert a new holding. Returns its assigned id.
    /// New records go to the front so the list stays newest-first.
    pub fn add_fund(&self, ledger: &mut Ledger, terms: FundTerms) -> Result<Uuid, CoreError> {
        let terms = self.validate_terms(terms)?;
        let fund = MutualFund::from_terms(terms, Utc::now());
        let id = fund.id;
        ledger.funds.insert(0, fund);
        Ok(id)
    }

    /// Replace all mutable fields of an existing holding.
    pub fn update_fund(
        &self,
        ledger: &mut Ledger,
        id: Uuid,
        terms: FundTerms,
    ) -> Result<(), CoreError> {
        let terms = self.validate_terms(terms)?;
        let fund = ledger
            .funds
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| CoreError::FundNotFound(id.to_string()))?;
        fund.apply_terms(terms, Utc::now());
        Ok(())
    }

    /// Remove a holding by id.
    pub fn delete_fund(&self, ledger: &mut Ledger, id: Uuid) -> Result<(), CoreError> {
        let idx = ledger
            .funds
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| CoreError::FundNotFound(id.to_string()))?;
        ledger.funds.remove(idx);
        Ok(())
    }

    /// Remove every holding. Returns how many were removed.
    pub fn delete_all(&self, ledger: &mut Ledger) -> usize {
        let count = ledger.funds.len();
        ledger.funds.clear();
        count
    }

    /// Look up a single holding.
    #[must_use]
    pub fn get_fund<'a>(&self, ledger: &'a Ledger, id: Uuid) -> Option<&'a MutualFund> {
        ledger.funds.iter().find(|f| f.id == id)
    }

    /// All holdings, most-recently-created first.
    #[must_use]
    pub fn list_funds<'a>(&self, ledger: &'a Ledger) -> &'a [MutualFund] {
        &ledger.funds
    }

    /// Validate the entered values and normalize the SIP fields:
    /// SIP holdings must carry amount and debit date; Lumpsum holdings
    /// have their SIP fields cleared regardless of what was entered.
    fn validate_terms(&self, mut terms: FundTerms) -> Result<FundTerms, CoreError> {
        if !terms.current_value.is_finite() || terms.current_value < 0.0 {
            return Err(CoreError::Validation(
                "Current value must be a non-negative number".into(),
            ));
        }
        if !terms.invested_value.is_finite() || terms.invested_value <= 0.0 {
            return Err(CoreError::Validation(
                "Invested value must be a positive number".into(),
            ));
        }

        match terms.investment_type {
            InvestmentType::Sip => {
                let amount = terms.sip_amount.ok_or_else(|| {
                    CoreError::Validation("SIP amount is required for SIP holdings".into())
                })?;
                if !amount.is_finite() || amount <= 0.0 {
                    return Err(CoreError::Validation(
                        "SIP amount must be a positive number".into(),
                    ));
                }
                let date = terms.sip_date.ok_or_else(|| {
                    CoreError::Validation("SIP date is required for SIP holdings".into())
                })?;
                if !(1..=31).contains(&date) {
                    return Err(CoreError::Validation(
                        "SIP date must be a day of month between 1 and 31".into(),
                    ));
                }
                if terms.frequency_type.is_none() {
                    return Err(CoreError::Validation(
                        "SIP frequency is required for SIP holdings".into(),
                    ));
                }
            }
            InvestmentType::Lumpsum => {
                terms.frequency_type = None;
                terms.sip_amount = None;
                terms.sip_date = None;
            }
        }

        Ok(terms)
    }
}

impl Default for FundService {
    fn default() -> Self {
        Self::new()
    }
}
