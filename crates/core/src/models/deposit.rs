use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payout behavior of a fixed deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepositType {
    /// Interest compounds and is paid out at maturity
    Cumulative,
    /// Interest is paid out periodically, never compounded
    Payout,
    /// Tax-saving deposit — simple interest, locked until maturity
    TaxSaving,
}

impl std::fmt::Display for DepositType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepositType::Cumulative => write!(f, "Cumulative"),
            DepositType::Payout => write!(f, "Payout"),
            DepositType::TaxSaving => write!(f, "Tax Saving"),
        }
    }
}

/// How often interest is credited (for cumulative deposits) or paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Quarterly,
    Monthly,
    Daily,
    HalfYearly,
    Yearly,
    /// Single credit at maturity (tax-saving deposits only)
    AtMaturity,
}

impl std::fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompoundingFrequency::Quarterly => write!(f, "Quarterly"),
            CompoundingFrequency::Monthly => write!(f, "Monthly"),
            CompoundingFrequency::Daily => write!(f, "Daily"),
            CompoundingFrequency::HalfYearly => write!(f, "Half Yearly"),
            CompoundingFrequency::Yearly => write!(f, "Yearly"),
            CompoundingFrequency::AtMaturity => write!(f, "At Maturity"),
        }
    }
}

impl DepositType {
    /// Which payout/compounding frequencies a bank actually offers for
    /// each deposit type. Enforced when a deposit is created or updated;
    /// the accrual math itself accepts any combination.
    pub fn allowed_frequencies(&self) -> &'static [CompoundingFrequency] {
        use CompoundingFrequency::*;
        match self {
            DepositType::Cumulative => &[Quarterly, Monthly, Daily, HalfYearly, Yearly],
            DepositType::Payout => &[Monthly, Quarterly, HalfYearly, Yearly],
            DepositType::TaxSaving => &[AtMaturity, Monthly, Quarterly, HalfYearly, Yearly],
        }
    }
}

/// A fixed deposit held at a bank or NBFC.
///
/// Stores only the static terms. The current accrued value is never
/// persisted — it is a function of wall-clock time and gets recomputed
/// by the accrual service on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDeposit {
    /// Unique identifier, assigned on insert
    pub id: Uuid,

    /// Bank / organization holding the deposit
    pub organization_name: String,

    /// Principal amount (whole currency units)
    pub investment_amount: f64,

    /// Annual interest rate in percent (e.g., 7.5 for 7.5%)
    pub annual_rate: f64,

    /// Date the deposit started accruing (daily granularity)
    pub start_date: NaiveDate,

    /// Tenure, as entered: years + months + days
    pub tenure_years: u32,
    pub tenure_months: u32,
    pub tenure_days: u32,

    pub deposit_type: DepositType,
    pub compounding_frequency: CompoundingFrequency,

    /// Set on insert, never changed afterwards
    pub created_at: DateTime<Utc>,

    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// The mutable terms of a fixed deposit — everything the owner can edit.
/// `id` and `created_at` are managed by the deposit store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositTerms {
    pub organization_name: String,
    pub investment_amount: f64,
    pub annual_rate: f64,
    pub start_date: NaiveDate,
    pub tenure_years: u32,
    pub tenure_months: u32,
    pub tenure_days: u32,
    pub deposit_type: DepositType,
    pub compounding_frequency: CompoundingFrequency,
}

impl FixedDeposit {
    /// Build a deposit from its terms, stamping identity and timestamps.
    pub fn from_terms(terms: DepositTerms, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_name: terms.organization_name,
            investment_amount: terms.investment_amount,
            annual_rate: terms.annual_rate,
            start_date: terms.start_date,
            tenure_years: terms.tenure_years,
            tenure_months: terms.tenure_months,
            tenure_days: terms.tenure_days,
            deposit_type: terms.deposit_type,
            compounding_frequency: terms.compounding_frequency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all mutable fields from `terms`, refreshing `updated_at`.
    pub fn apply_terms(&mut self, terms: DepositTerms, now: DateTime<Utc>) {
        self.organization_name = terms.organization_name;
        self.investment_amount = terms.investment_amount;
        self.annual_rate = terms.annual_rate;
        self.start_date = terms.start_date;
        self.tenure_years = terms.tenure_years;
        self.tenure_months = terms.tenure_months;
        self.tenure_days = terms.tenure_days;
        self.deposit_type = terms.deposit_type;
        self.compounding_frequency = terms.compounding_frequency;
        self.updated_at = now;
    }

    /// Tenure as "2y 3m 15d" for display. Zero components are skipped.
    #[must_use]
    pub fn tenure_display(&self) -> String {
        let mut parts = Vec::new();
        if self.tenure_years > 0 {
            parts.push(format!("{}y", self.tenure_years));
        }
        if self.tenure_months > 0 {
            parts.push(format!("{}m", self.tenure_months));
        }
        if self.tenure_days > 0 {
            parts.push(format!("{}d", self.tenure_days));
        }
        if parts.is_empty() {
            "0d".to_string()
        } else {
            parts.join(" ")
        }
    }
}
