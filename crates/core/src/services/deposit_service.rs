use chrono::Utc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::deposit::{DepositTerms, FixedDeposit};
use crate::models::ledger::Ledger;

/// Tenure bounds, using the entry-form approximation of 365-day years
/// and 30-day months. Interest accrual never uses the 30-day factor;
/// this check exists only to reject nonsense tenures.
const MIN_TENURE_DAYS: u32 = 7;
const MAX_TENURE_DAYS: u32 = 10_950; // 30 years

/// Minimum principal accepted by the entry form (whole currency units).
const MIN_INVESTMENT: f64 = 1000.0;

/// Highest plausible annual rate, in percent.
const MAX_ANNUAL_RATE: f64 = 20.0;

/// Manages the fixed-deposit records in a ledger: insert, update,
/// delete, lookup. Validates terms before every mutation.
///
/// Pure business logic over the in-memory ledger — persistence is the
/// storage manager's job.
pub struct DepositService;

impl DepositService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and insert a new deposit. Returns its assigned id.
    /// New records go to the front so the list stays newest-first.
    pub fn add_deposit(
        &self,
        ledger: &mut Ledger,
        terms: DepositTerms,
    ) -> Result<Uuid, CoreError> {
        self.validate_terms(&terms)?;
        let deposit = FixedDeposit::from_terms(terms, Utc::now());
        let id = deposit.id;
        ledger.deposits.insert(0, deposit);
        Ok(id)
    }

    /// Replace all mutable fields of an existing deposit.
    /// `id` and `created_at` are preserved; `updated_at` is refreshed.
    pub fn update_deposit(
        &self,
        ledger: &mut Ledger,
        id: Uuid,
        terms: DepositTerms,
    ) -> Result<(), CoreError> {
        self.validate_terms(&terms)?;
        let deposit = ledger
            .deposits
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::DepositNotFound(id.to_string()))?;
        deposit.apply_terms(terms, Utc::now());
        Ok(())
    }

    /// Remove a deposit by id.
    pub fn delete_deposit(&self, ledger: &mut Ledger, id: Uuid) -> Result<(), CoreError> {
        let idx = ledger
            .deposits
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| CoreError::DepositNotFound(id.to_string()))?;
        ledger.deposits.remove(idx);
        Ok(())
    }

    /// Remove every deposit. Returns how many were removed.
    pub fn delete_all(&self, ledger: &mut Ledger) -> usize {
        let count = ledger.deposits.len();
        ledger.deposits.clear();
        count
    }

    /// Look up a single deposit.
    #[must_use]
    pub fn get_deposit<'a>(&self, ledger: &'a Ledger, id: Uuid) -> Option<&'a FixedDeposit> {
        ledger.deposits.iter().find(|d| d.id == id)
    }

    /// All deposits, most-recently-created first.
    #[must_use]
    pub fn list_deposits<'a>(&self, ledger: &'a Ledger) -> &'a [FixedDeposit] {
        &ledger.deposits
    }

    /// Entry-form validation. Mirrors what a bank would accept:
    /// a real organization, a principal of at least 1000, a rate in
    /// (0, 20], a start date that is not in the future, a tenure between
    /// 7 days and 30 years, and a frequency the deposit type offers.
    fn validate_terms(&self, terms: &DepositTerms) -> Result<(), CoreError> {
        let name = terms.organization_name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation(
                "Organization name is required".into(),
            ));
        }
        if name.chars().count() < 2 {
            return Err(CoreError::Validation(
                "Organization name must be at least 2 characters".into(),
            ));
        }

        if !terms.investment_amount.is_finite() || terms.investment_amount <= 0.0 {
            return Err(CoreError::Validation(
                "Investment amount must be a positive number".into(),
            ));
        }
        if terms.investment_amount < MIN_INVESTMENT {
            return Err(CoreError::Validation(format!(
                "Minimum investment amount is {MIN_INVESTMENT}"
            )));
        }

        if !terms.annual_rate.is_finite() || terms.annual_rate <= 0.0 {
            return Err(CoreError::Validation(
                "Annual rate must be a positive number".into(),
            ));
        }
        if terms.annual_rate > MAX_ANNUAL_RATE {
            return Err(CoreError::Validation(format!(
                "Annual rate {}% is too high (max {MAX_ANNUAL_RATE}%)",
                terms.annual_rate
            )));
        }

        let today = Utc::now().date_naive();
        if terms.start_date > today {
            return Err(CoreError::Validation(format!(
                "Start date {} cannot be in the future",
                terms.start_date
            )));
        }

        self.validate_tenure(terms)?;

        if !terms
            .deposit_type
            .allowed_frequencies()
            .contains(&terms.compounding_frequency)
        {
            return Err(CoreError::Validation(format!(
                "{} deposits do not offer {} interest",
                terms.deposit_type, terms.compounding_frequency
            )));
        }

        Ok(())
    }

    fn validate_tenure(&self, terms: &DepositTerms) -> Result<(), CoreError> {
        let (years, months, days) =
            (terms.tenure_years, terms.tenure_months, terms.tenure_days);

        if years == 0 && months == 0 && days == 0 {
            return Err(CoreError::Validation("Tenure must be greater than 0".into()));
        }
        if years > 30 {
            return Err(CoreError::Validation(
                "Tenure years must be between 0 and 30".into(),
            ));
        }
        if months > 11 {
            return Err(CoreError::Validation(
                "Tenure months must be between 0 and 11".into(),
            ));
        }
        if days > 365 {
            return Err(CoreError::Validation(
                "Tenure days must be between 0 and 365".into(),
            ));
        }

        let approx_days = years * 365 + months * 30 + days;
        if approx_days < MIN_TENURE_DAYS {
            return Err(CoreError::Validation(format!(
                "Minimum tenure is {MIN_TENURE_DAYS} days"
            )));
        }
        if approx_days > MAX_TENURE_DAYS {
            return Err(CoreError::Validation("Maximum tenure is 30 years".into()));
        }

        Ok(())
    }
}

impl Default for DepositService {
    fn default() -> Self {
        Self::new()
    }
}
