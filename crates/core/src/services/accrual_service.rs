use chrono::{Days, Months, NaiveDate};

use crate::models::deposit::{CompoundingFrequency, DepositType, FixedDeposit};

/// Computes accrued interest and maturity dates for fixed deposits.
///
/// Pure calculation — no I/O, no clock access. The evaluation date is
/// always passed in by the caller, so results are deterministic and the
/// system clock only gets consulted at the outermost facade boundary.
pub struct AccrualService;

impl AccrualService {
    pub fn new() -> Self {
        Self
    }

    /// Interest accrued by `deposit` between its start date and `as_of`,
    /// rounded to whole currency units.
    #[must_use]
    pub fn current_return(&self, deposit: &FixedDeposit, as_of: NaiveDate) -> u64 {
        self.compute_current_return(
            deposit.investment_amount,
            deposit.annual_rate,
            deposit.start_date,
            deposit.deposit_type,
            deposit.compounding_frequency,
            as_of,
        )
    }

    /// Accrued interest for a deposit with the given terms as of `as_of`.
    ///
    /// Cumulative deposits compound at `frequency`; Payout and Tax Saving
    /// deposits earn simple interest. Elapsed time is measured in whole
    /// days and converted with a uniform 365-day year (not leap-year
    /// accurate). Rounding is half-up (half away from zero).
    ///
    /// Total over its domain: a deposit that has not started accruing
    /// (start today or in the future) yields 0, and non-finite
    /// intermediates are clamped to 0 rather than leaking NaN into
    /// displayed currency.
    #[must_use]
    pub fn compute_current_return(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        start_date: NaiveDate,
        deposit_type: DepositType,
        frequency: CompoundingFrequency,
        as_of: NaiveDate,
    ) -> u64 {
        let days_elapsed = (as_of - start_date).num_days();
        if days_elapsed <= 0 {
            return 0;
        }

        let rate = annual_rate_percent / 100.0;
        let years_elapsed = days_elapsed as f64 / 365.0;

        let interest = match deposit_type {
            DepositType::Cumulative => {
                let n = f64::from(periods_per_year(frequency));
                let amount = principal * (1.0 + rate / n).powf(n * years_elapsed);
                amount - principal
            }
            DepositType::Payout | DepositType::TaxSaving => {
                principal * rate * years_elapsed
            }
        };

        let rounded = interest.round();
        // NaN fails the comparison, so malformed inputs also land on 0
        if rounded >= 0.0 && rounded.is_finite() {
            rounded as u64
        } else {
            0
        }
    }

    /// The date a deposit matures: start date + tenure, applied as
    /// years, then months, then days, with ordinary calendar rollover.
    ///
    /// Month arithmetic clamps at month end (2024-01-31 + 1 month is
    /// 2024-02-29), unlike the 365/30-day approximation used for
    /// interest accrual. Saturates at `NaiveDate::MAX` if the tenure
    /// somehow runs off the calendar.
    #[must_use]
    pub fn maturity_date(
        &self,
        start_date: NaiveDate,
        years: u32,
        months: u32,
        days: u32,
    ) -> NaiveDate {
        start_date
            .checked_add_months(Months::new(years.saturating_mul(12)))
            .and_then(|d| d.checked_add_months(Months::new(months)))
            .and_then(|d| d.checked_add_days(Days::new(u64::from(days))))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Maturity date of a stored deposit.
    #[must_use]
    pub fn maturity_of(&self, deposit: &FixedDeposit) -> NaiveDate {
        self.maturity_date(
            deposit.start_date,
            deposit.tenure_years,
            deposit.tenure_months,
            deposit.tenure_days,
        )
    }
}

/// Compounding periods per year. The calculator accepts any pairing,
/// so frequencies without a defined period count (At Maturity) take
/// the quarterly default.
fn periods_per_year(frequency: CompoundingFrequency) -> u32 {
    match frequency {
        CompoundingFrequency::Monthly => 12,
        CompoundingFrequency::Daily => 365,
        CompoundingFrequency::HalfYearly => 2,
        CompoundingFrequency::Yearly => 1,
        CompoundingFrequency::Quarterly | CompoundingFrequency::AtMaturity => 4,
    }
}

impl Default for AccrualService {
    fn default() -> Self {
        Self::new()
    }
}
