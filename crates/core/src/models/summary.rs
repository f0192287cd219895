use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::deposit::FixedDeposit;

/// A fixed deposit enriched with its accrued return as of a given date.
/// Ephemeral — recomputed on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositPosition {
    pub deposit: FixedDeposit,

    /// Interest accrued between `start_date` and the evaluation date,
    /// rounded to whole currency units
    pub current_returns: u64,
}

/// Aggregate view over all fixed deposits at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositSummary {
    /// Date the accrued returns were evaluated at
    pub as_of: NaiveDate,

    /// Sum of principal over all deposits
    pub total_invested: f64,

    /// Sum of accrued returns over all deposits
    pub total_current_return: u64,

    /// Number of deposits included
    pub total_deposits: usize,

    /// Per-deposit breakdown, in the input (newest-first) order
    pub items: Vec<DepositPosition>,
}

/// Aggregate view over all mutual-fund holdings.
/// Pure sums of stored fields — no per-item computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundSummary {
    /// Sum of user-entered current values
    pub total_current: f64,

    /// Sum of user-entered invested values
    pub total_invested: f64,

    /// Sum of fund counts
    pub total_funds: u32,
}

/// Net worth across all tracked asset categories at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetWorth {
    pub as_of: NaiveDate,

    /// Fixed deposits: principal + accrued returns
    pub fixed_deposit_value: f64,

    /// Mutual funds: stored current value
    pub mutual_fund_value: f64,

    /// Sum of the category values above
    pub total: f64,
}
