pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use uuid::Uuid;

use errors::CoreError;
use models::{
    deposit::{DepositTerms, FixedDeposit},
    fund::{FundTerms, MutualFund},
    ledger::Ledger,
    summary::{DepositPosition, DepositSummary, FundSummary, NetWorth},
    user::UserProfile,
};
use services::{
    accrual_service::AccrualService, deposit_service::DepositService, fund_service::FundService,
    networth_service::NetworthService,
};
use storage::manager::StorageManager;

/// Main entry point for the Networth Tracker core library.
/// Holds the ledger and all services needed to operate on it.
///
/// Every computation takes an explicit `as_of` date; the system clock is
/// consulted only in the `*_today` convenience wrappers, so everything
/// below this surface stays deterministic.
#[must_use]
pub struct NetworthTracker {
    ledger: Ledger,
    deposit_service: DepositService,
    fund_service: FundService,
    accrual_service: AccrualService,
    networth_service: NetworthService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for NetworthTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworthTracker")
            .field("deposits", &self.ledger.deposits.len())
            .field("funds", &self.ledger.funds.len())
            .field("user", &self.ledger.user.as_ref().map(|u| u.name.as_str()))
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl NetworthTracker {
    /// Create a brand new empty ledger.
    pub fn create_new() -> Self {
        Self::build(Ledger::default())
    }

    /// Load an existing ledger from encrypted bytes (password required).
    /// Use this for WASM / mobile shells where the frontend handles file I/O.
    pub fn load_from_bytes(encrypted: &[u8], password: &str) -> Result<Self, CoreError> {
        let ledger = StorageManager::load_from_bytes(encrypted, password)?;
        Ok(Self::build(ledger))
    }

    /// Save the current ledger to encrypted bytes.
    /// Returns raw bytes that the frontend can write to a file.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self, password: &str) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.ledger, password)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from an encrypted file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, password: &str) -> Result<Self, CoreError> {
        let ledger = StorageManager::load_from_file(path, password)?;
        Ok(Self::build(ledger))
    }

    /// Save to an encrypted file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str, password: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.ledger, path, password)?;
        self.dirty = false;
        Ok(())
    }

    // ── Fixed Deposits ──────────────────────────────────────────────

    /// Add a fixed deposit. Validates the terms, assigns an id.
    pub fn add_deposit(&mut self, terms: DepositTerms) -> Result<Uuid, CoreError> {
        let id = self.deposit_service.add_deposit(&mut self.ledger, terms)?;
        self.dirty = true;
        Ok(id)
    }

    /// Replace all mutable fields of an existing deposit.
    pub fn update_deposit(&mut self, id: Uuid, terms: DepositTerms) -> Result<(), CoreError> {
        self.deposit_service
            .update_deposit(&mut self.ledger, id, terms)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a deposit by id.
    pub fn delete_deposit(&mut self, id: Uuid) -> Result<(), CoreError> {
        self.deposit_service.delete_deposit(&mut self.ledger, id)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove every deposit. Returns how many were removed.
    pub fn delete_all_deposits(&mut self) -> usize {
        let removed = self.deposit_service.delete_all(&mut self.ledger);
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// Get a single deposit by id.
    #[must_use]
    pub fn get_deposit(&self, id: Uuid) -> Option<&FixedDeposit> {
        self.deposit_service.get_deposit(&self.ledger, id)
    }

    /// All deposits, most-recently-created first.
    #[must_use]
    pub fn get_deposits(&self) -> &[FixedDeposit] {
        self.deposit_service.list_deposits(&self.ledger)
    }

    /// Number of stored deposits.
    #[must_use]
    pub fn deposit_count(&self) -> usize {
        self.ledger.deposits.len()
    }

    // ── Accrual & Summaries ─────────────────────────────────────────

    /// Every deposit enriched with its accrued return as of `as_of`.
    #[must_use]
    pub fn deposit_positions(&self, as_of: NaiveDate) -> Vec<DepositPosition> {
        self.networth_service
            .aggregate_deposits(&self.ledger.deposits, as_of)
            .items
    }

    /// Aggregate fixed-deposit summary as of `as_of`.
    #[must_use]
    pub fn deposit_summary(&self, as_of: NaiveDate) -> DepositSummary {
        self.networth_service
            .aggregate_deposits(&self.ledger.deposits, as_of)
    }

    /// Aggregate fixed-deposit summary as of today.
    #[must_use]
    pub fn deposit_summary_today(&self) -> DepositSummary {
        self.deposit_summary(chrono::Utc::now().date_naive())
    }

    /// Accrued return for one deposit as of `as_of`.
    /// Returns `None` if the id is unknown.
    #[must_use]
    pub fn current_return(&self, id: Uuid, as_of: NaiveDate) -> Option<u64> {
        self.get_deposit(id)
            .map(|d| self.accrual_service.current_return(d, as_of))
    }

    /// Maturity date for one deposit. Returns `None` if the id is unknown.
    #[must_use]
    pub fn deposit_maturity(&self, id: Uuid) -> Option<NaiveDate> {
        self.get_deposit(id).map(|d| self.accrual_service.maturity_of(d))
    }

    /// Calendar-correct maturity date for arbitrary terms:
    /// start + years, then months, then days.
    #[must_use]
    pub fn maturity_date(
        &self,
        start_date: NaiveDate,
        years: u32,
        months: u32,
        days: u32,
    ) -> NaiveDate {
        self.accrual_service
            .maturity_date(start_date, years, months, days)
    }

    // ── Mutual Funds ────────────────────────────────────────────────

    /// Add a mutual-fund holding. Validates and normalizes SIP fields.
    pub fn add_fund(&mut self, terms: FundTerms) -> Result<Uuid, CoreError> {
        let id = self.fund_service.add_fund(&mut self.ledger, terms)?;
        self.dirty = true;
        Ok(id)
    }

    /// Replace all mutable fields of an existing holding.
    pub fn update_fund(&mut self, id: Uuid, terms: FundTerms) -> Result<(), CoreError> {
        self.fund_service.update_fund(&mut self.ledger, id, terms)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a holding by id.
    pub fn delete_fund(&mut self, id: Uuid) -> Result<(), CoreError> {
        self.fund_service.delete_fund(&mut self.ledger, id)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove every holding. Returns how many were removed.
    pub fn delete_all_funds(&mut self) -> usize {
        let removed = self.fund_service.delete_all(&mut self.ledger);
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// Get a single holding by id.
    #[must_use]
    pub fn get_fund(&self, id: Uuid) -> Option<&MutualFund> {
        self.fund_service.get_fund(&self.ledger, id)
    }

    /// All holdings, most-recently-created first.
    #[must_use]
    pub fn get_funds(&self) -> &[MutualFund] {
        self.fund_service.list_funds(&self.ledger)
    }

    /// Number of stored holdings.
    #[must_use]
    pub fn fund_count(&self) -> usize {
        self.ledger.funds.len()
    }

    /// Aggregate mutual-fund summary (stored fields, no computation).
    #[must_use]
    pub fn fund_summary(&self) -> FundSummary {
        self.networth_service.aggregate_funds(&self.ledger.funds)
    }

    // ── Net Worth ───────────────────────────────────────────────────

    /// Net worth across both asset categories as of `as_of`.
    #[must_use]
    pub fn net_worth(&self, as_of: NaiveDate) -> NetWorth {
        self.networth_service
            .net_worth(&self.ledger.deposits, &self.ledger.funds, as_of)
    }

    /// Net worth as of today.
    #[must_use]
    pub fn net_worth_today(&self) -> NetWorth {
        self.net_worth(chrono::Utc::now().date_naive())
    }

    // ── User Profile ────────────────────────────────────────────────

    /// Set the owner's display name. Must be non-empty after trimming.
    pub fn set_user_name(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("User name cannot be empty".into()));
        }
        self.ledger.user = Some(UserProfile::new(trimmed));
        self.dirty = true;
        Ok(())
    }

    /// The owner's profile, if onboarding has run.
    #[must_use]
    pub fn get_user(&self) -> Option<&UserProfile> {
        self.ledger.user.as_ref()
    }

    /// Remove the owner's profile. Returns whether one existed.
    pub fn clear_user(&mut self) -> bool {
        let existed = self.ledger.user.take().is_some();
        if existed {
            self.dirty = true;
        }
        existed
    }

    // ── Password & Dirty State ──────────────────────────────────────

    /// Re-encrypt the ledger with a new password.
    /// Returns the encrypted bytes. The caller should write them to storage.
    ///
    /// `last_saved_bytes` must be the most recently saved encrypted bytes
    /// for this ledger. The current password is verified by decrypting
    /// them; if that fails, returns `CoreError::Decryption`.
    pub fn change_password(
        &mut self,
        last_saved_bytes: &[u8],
        current_password: &str,
        new_password: &str,
    ) -> Result<Vec<u8>, CoreError> {
        // Verify the current password against the actual saved data.
        StorageManager::load_from_bytes(last_saved_bytes, current_password)?;

        let new_bytes = StorageManager::save_to_bytes(&self.ledger, new_password)?;
        self.dirty = false;
        Ok(new_bytes)
    }

    /// Returns `true` if the ledger has been modified since the last
    /// save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all deposits as a JSON string.
    pub fn export_deposits_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.deposits).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize deposits to JSON: {e}"))
        })
    }

    /// Export all deposits as a CSV string.
    /// Columns: id, organization_name, investment_amount, annual_rate,
    /// start_date, tenure_years, tenure_months, tenure_days,
    /// deposit_type, compounding_frequency
    #[must_use]
    pub fn export_deposits_to_csv(&self) -> String {
        let mut csv = String::from(
            "id,organization_name,investment_amount,annual_rate,start_date,\
             tenure_years,tenure_months,tenure_days,deposit_type,compounding_frequency\n",
        );
        for deposit in &self.ledger.deposits {
            let name = &deposit.organization_name;
            // Escape CSV: quote fields containing commas, quotes, or newlines
            let escaped_name = if name.contains(',') || name.contains('"') || name.contains('\n') {
                format!("\"{}\"", name.replace('"', "\"\""))
            } else {
                name.clone()
            };
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                deposit.id,
                escaped_name,
                deposit.investment_amount,
                deposit.annual_rate,
                deposit.start_date,
                deposit.tenure_years,
                deposit.tenure_months,
                deposit.tenure_days,
                deposit.deposit_type,
                deposit.compounding_frequency,
            ));
        }
        csv
    }

    /// Import deposits from a JSON array of terms. Each entry is
    /// validated and gets a fresh id; if any entry fails validation,
    /// none are added (all-or-nothing). Returns the number imported.
    pub fn import_deposits_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let terms_list: Vec<DepositTerms> = serde_json::from_str(json)?;
        let count = terms_list.len();

        // Phase 1: validate everything against a scratch ledger
        let mut scratch = self.ledger.clone();
        for terms in &terms_list {
            self.deposit_service.add_deposit(&mut scratch, terms.clone())?;
        }

        // Phase 2: all valid — keep the scratch ledger
        self.ledger = scratch;
        if count > 0 {
            self.dirty = true;
        }
        Ok(count)
    }

    /// Export the full ledger as JSON (unencrypted snapshot for
    /// debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger) -> Self {
        Self {
            ledger,
            deposit_service: DepositService::new(),
            fund_service: FundService::new(),
            accrual_service: AccrualService::new(),
            networth_service: NetworthService::new(),
            dirty: false,
        }
    }
}
