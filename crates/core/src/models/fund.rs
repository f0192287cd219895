use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How money goes into a mutual-fund holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentType {
    /// Systematic Investment Plan — recurring fixed-amount contributions
    #[serde(rename = "SIP")]
    Sip,
    /// One-time investment
    Lumpsum,
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestmentType::Sip => write!(f, "SIP"),
            InvestmentType::Lumpsum => write!(f, "Lumpsum"),
        }
    }
}

/// How often a SIP contribution is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SipFrequency {
    Daily,
    Weekly,
    Monthly,
    Annually,
}

impl std::fmt::Display for SipFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SipFrequency::Daily => write!(f, "Daily"),
            SipFrequency::Weekly => write!(f, "Weekly"),
            SipFrequency::Monthly => write!(f, "Monthly"),
            SipFrequency::Annually => write!(f, "Annually"),
        }
    }
}

/// A mutual-fund holding.
///
/// Unlike fixed deposits there is no accrual math here: `current_value`
/// is whatever the owner last entered, and is simply overwritten on
/// update. The SIP fields are only present for `InvestmentType::Sip`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutualFund {
    /// Unique identifier, assigned on insert
    pub id: Uuid,

    pub investment_type: InvestmentType,

    /// Current market value, user-entered
    pub current_value: f64,

    /// Total amount put in so far, user-entered
    pub invested_value: f64,

    /// Number of distinct funds this holding covers
    #[serde(default)]
    pub total_funds: u32,

    /// SIP contribution cadence (SIP only)
    #[serde(default)]
    pub frequency_type: Option<SipFrequency>,

    /// Amount per SIP installment (SIP only)
    #[serde(default)]
    pub sip_amount: Option<f64>,

    /// Day of month the SIP is debited, 1..=31 (SIP only)
    #[serde(default)]
    pub sip_date: Option<u32>,

    /// Set on insert, never changed afterwards
    pub created_at: DateTime<Utc>,

    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a mutual-fund holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundTerms {
    pub investment_type: InvestmentType,
    pub current_value: f64,
    pub invested_value: f64,
    pub total_funds: u32,
    pub frequency_type: Option<SipFrequency>,
    pub sip_amount: Option<f64>,
    pub sip_date: Option<u32>,
}

impl MutualFund {
    pub fn from_terms(terms: FundTerms, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            investment_type: terms.investment_type,
            current_value: terms.current_value,
            invested_value: terms.invested_value,
            total_funds: terms.total_funds,
            frequency_type: terms.frequency_type,
            sip_amount: terms.sip_amount,
            sip_date: terms.sip_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_terms(&mut self, terms: FundTerms, now: DateTime<Utc>) {
        self.investment_type = terms.investment_type;
        self.current_value = terms.current_value;
        self.invested_value = terms.invested_value;
        self.total_funds = terms.total_funds;
        self.frequency_type = terms.frequency_type;
        self.sip_amount = terms.sip_amount;
        self.sip_date = terms.sip_date;
        self.updated_at = now;
    }
}
