use chrono::NaiveDate;

use crate::models::deposit::FixedDeposit;
use crate::models::fund::MutualFund;
use crate::models::summary::{DepositPosition, DepositSummary, FundSummary, NetWorth};
use crate::services::accrual_service::AccrualService;

/// Folds record collections into portfolio summaries and the overall
/// net-worth figure.
///
/// Pure: takes already-fetched records and an evaluation date, returns
/// computed values. Never touches storage or the clock.
pub struct NetworthService {
    accrual_service: AccrualService,
}

impl NetworthService {
    pub fn new() -> Self {
        Self {
            accrual_service: AccrualService::new(),
        }
    }

    /// Enrich each deposit with its accrued return as of `as_of` and
    /// total the collection. Input order is preserved — callers hand in
    /// the stored newest-first sequence and get it back unchanged.
    /// An empty collection yields a zeroed summary, not an error.
    #[must_use]
    pub fn aggregate_deposits(
        &self,
        deposits: &[FixedDeposit],
        as_of: NaiveDate,
    ) -> DepositSummary {
        let mut total_invested = 0.0;
        let mut total_current_return: u64 = 0;

        let items: Vec<DepositPosition> = deposits
            .iter()
            .map(|deposit| {
                let current_returns = self.accrual_service.current_return(deposit, as_of);
                total_invested += deposit.investment_amount;
                total_current_return += current_returns;
                DepositPosition {
                    deposit: deposit.clone(),
                    current_returns,
                }
            })
            .collect();

        DepositSummary {
            as_of,
            total_invested,
            total_current_return,
            total_deposits: items.len(),
            items,
        }
    }

    /// Sum the stored mutual-fund fields. No per-item computation —
    /// current value is whatever the owner last entered.
    #[must_use]
    pub fn aggregate_funds(&self, funds: &[MutualFund]) -> FundSummary {
        let mut summary = FundSummary {
            total_current: 0.0,
            total_invested: 0.0,
            total_funds: 0,
        };
        for fund in funds {
            summary.total_current += fund.current_value;
            summary.total_invested += fund.invested_value;
            summary.total_funds += fund.total_funds;
        }
        summary
    }

    /// Net worth across both asset categories: fixed deposits count at
    /// principal plus accrued return, mutual funds at their stored
    /// current value.
    #[must_use]
    pub fn net_worth(
        &self,
        deposits: &[FixedDeposit],
        funds: &[MutualFund],
        as_of: NaiveDate,
    ) -> NetWorth {
        let deposit_summary = self.aggregate_deposits(deposits, as_of);
        let fund_summary = self.aggregate_funds(funds);

        let fixed_deposit_value =
            deposit_summary.total_invested + deposit_summary.total_current_return as f64;
        let mutual_fund_value = fund_summary.total_current;

        NetWorth {
            as_of,
            fixed_deposit_value,
            mutual_fund_value,
            total: fixed_deposit_value + mutual_fund_value,
        }
    }
}

impl Default for NetworthService {
    fn default() -> Self {
        Self::new()
    }
}
