// ═══════════════════════════════════════════════════════════════════
// Accrual Tests — AccrualService: compound/simple interest, clamping,
// rounding, maturity-date calendar arithmetic
// ═══════════════════════════════════════════════════════════════════

use chrono::{Days, NaiveDate, Utc};

use networth_tracker_core::models::deposit::{
    CompoundingFrequency, DepositTerms, DepositType, FixedDeposit,
};
use networth_tracker_core::services::accrual_service::AccrualService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Evaluation date used throughout; start dates are derived from it by
/// subtracting an exact number of elapsed days.
const AS_OF: (i32, u32, u32) = (2025, 6, 15);

fn as_of() -> NaiveDate {
    d(AS_OF.0, AS_OF.1, AS_OF.2)
}

fn start_days_before(days: u64) -> NaiveDate {
    as_of().checked_sub_days(Days::new(days)).unwrap()
}

fn accrued(
    principal: f64,
    rate: f64,
    days_elapsed: u64,
    deposit_type: DepositType,
    frequency: CompoundingFrequency,
) -> u64 {
    AccrualService::new().compute_current_return(
        principal,
        rate,
        start_days_before(days_elapsed),
        deposit_type,
        frequency,
        as_of(),
    )
}

// ═══════════════════════════════════════════════════════════════════
//  Cumulative (compound interest)
// ═══════════════════════════════════════════════════════════════════

mod cumulative {
    use super::*;

    #[test]
    fn quarterly_one_year() {
        // 100000 * (1 + 0.08/4)^4 = 108243.216 → 8243
        let interest = accrued(
            100_000.0,
            8.0,
            365,
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
        );
        assert_eq!(interest, 8243);
    }

    #[test]
    fn monthly_one_year() {
        // 100000 * (1 + 0.12/12)^12 = 112682.503... → 12683
        let interest = accrued(
            100_000.0,
            12.0,
            365,
            DepositType::Cumulative,
            CompoundingFrequency::Monthly,
        );
        assert_eq!(interest, 12683);
    }

    #[test]
    fn daily_one_year() {
        // 10000 * (1 + 0.10/365)^365 = 11051.557... → 1052
        let interest = accrued(
            10_000.0,
            10.0,
            365,
            DepositType::Cumulative,
            CompoundingFrequency::Daily,
        );
        assert_eq!(interest, 1052);
    }

    #[test]
    fn half_yearly_two_years() {
        // 200000 * (1 + 0.07/2)^4 = 229504.600... → 29505
        let interest = accrued(
            200_000.0,
            7.0,
            730,
            DepositType::Cumulative,
            CompoundingFrequency::HalfYearly,
        );
        assert_eq!(interest, 29505);
    }

    #[test]
    fn yearly_one_year() {
        // 50000 * 1.06 = 53000 exactly
        let interest = accrued(
            50_000.0,
            6.0,
            365,
            DepositType::Cumulative,
            CompoundingFrequency::Yearly,
        );
        assert_eq!(interest, 3000);
    }

    #[test]
    fn at_maturity_falls_back_to_quarterly() {
        // The calculator never rejects a pairing; an unmapped frequency
        // compounds quarterly, so this matches quarterly_one_year.
        let interest = accrued(
            100_000.0,
            8.0,
            365,
            DepositType::Cumulative,
            CompoundingFrequency::AtMaturity,
        );
        assert_eq!(interest, 8243);
    }

    #[test]
    fn partial_quarter() {
        // 100 days: 100000 * (1.02)^(4 * 100/365) - 100000 = 2193.87 → 2194
        let interest = accrued(
            100_000.0,
            8.0,
            100,
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
        );
        assert_eq!(interest, 2194);
    }

    #[test]
    fn one_month_in() {
        // 30 days: 653.169... → 653
        let interest = accrued(
            100_000.0,
            8.0,
            30,
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
        );
        assert_eq!(interest, 653);
    }

    #[test]
    fn multi_year_large_principal() {
        // 912 days at 7.5% quarterly: 102007.657... → 102008
        let interest = accrued(
            500_000.0,
            7.5,
            912,
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
        );
        assert_eq!(interest, 102_008);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Payout / Tax Saving (simple interest)
// ═══════════════════════════════════════════════════════════════════

mod simple_interest {
    use super::*;

    #[test]
    fn payout_two_years() {
        // 50000 * 0.06 * 2 = 6000
        let interest = accrued(
            50_000.0,
            6.0,
            730,
            DepositType::Payout,
            CompoundingFrequency::Quarterly,
        );
        assert_eq!(interest, 6000);
    }

    #[test]
    fn payout_fifth_of_a_year() {
        // 73 days = 0.2 years: 50000 * 0.06 * 0.2 = 600
        let interest = accrued(
            50_000.0,
            6.0,
            73,
            DepositType::Payout,
            CompoundingFrequency::Quarterly,
        );
        assert_eq!(interest, 600);
    }

    #[test]
    fn tax_saving_one_year() {
        // 150000 * 0.07 * 1 = 10500
        let interest = accrued(
            150_000.0,
            7.0,
            365,
            DepositType::TaxSaving,
            CompoundingFrequency::AtMaturity,
        );
        assert_eq!(interest, 10_500);
    }

    #[test]
    fn frequency_is_ignored_for_simple_interest() {
        let monthly = accrued(
            80_000.0,
            7.2,
            400,
            DepositType::Payout,
            CompoundingFrequency::Monthly,
        );
        let yearly = accrued(
            80_000.0,
            7.2,
            400,
            DepositType::Payout,
            CompoundingFrequency::Yearly,
        );
        assert_eq!(monthly, yearly);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Boundaries & clamping
// ═══════════════════════════════════════════════════════════════════

mod clamping {
    use super::*;

    #[test]
    fn start_today_yields_zero() {
        let service = AccrualService::new();
        for deposit_type in [
            DepositType::Cumulative,
            DepositType::Payout,
            DepositType::TaxSaving,
        ] {
            let interest = service.compute_current_return(
                100_000.0,
                8.0,
                as_of(),
                deposit_type,
                CompoundingFrequency::Quarterly,
                as_of(),
            );
            assert_eq!(interest, 0, "{deposit_type} should not accrue on day zero");
        }
    }

    #[test]
    fn future_start_yields_zero_not_negative() {
        // Validation upstream rejects future-dated deposits, but the
        // calculator must not trust it.
        let service = AccrualService::new();
        let interest = service.compute_current_return(
            100_000.0,
            8.0,
            as_of().checked_add_days(Days::new(30)).unwrap(),
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
            as_of(),
        );
        assert_eq!(interest, 0);
    }

    #[test]
    fn one_day_elapsed_is_nonzero_for_daily_compounding() {
        let interest = accrued(
            1_000_000.0,
            10.0,
            1,
            DepositType::Cumulative,
            CompoundingFrequency::Daily,
        );
        // 1000000 * (1 + 0.1/365)^1 - 1000000 = 273.97 → 274
        assert_eq!(interest, 274);
    }

    #[test]
    fn nan_principal_clamps_to_zero() {
        let interest = accrued(
            f64::NAN,
            8.0,
            365,
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
        );
        assert_eq!(interest, 0);
    }

    #[test]
    fn nan_rate_clamps_to_zero() {
        let interest = accrued(
            100_000.0,
            f64::NAN,
            365,
            DepositType::Payout,
            CompoundingFrequency::Monthly,
        );
        assert_eq!(interest, 0);
    }

    #[test]
    fn infinite_principal_clamps_to_zero() {
        // inf * x - inf is NaN, which must never reach the caller
        let interest = accrued(
            f64::INFINITY,
            8.0,
            365,
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
        );
        assert_eq!(interest, 0);
    }

    #[test]
    fn monotonically_non_decreasing_in_as_of() {
        let service = AccrualService::new();
        let start = d(2022, 3, 1);
        let mut previous = 0u64;
        for offset in (0..1500).step_by(25) {
            let eval = start.checked_add_days(Days::new(offset)).unwrap();
            let interest = service.compute_current_return(
                250_000.0,
                7.25,
                start,
                DepositType::Cumulative,
                CompoundingFrequency::Quarterly,
                eval,
            );
            assert!(
                interest >= previous,
                "accrued interest shrank between day {} and the previous step",
                offset
            );
            previous = interest;
        }
    }

    #[test]
    fn accrues_past_maturity() {
        // A 1-year deposit evaluated after 2 years keeps accruing —
        // matching the stored-terms semantics, there is no maturity cap.
        let one_year = accrued(
            100_000.0,
            8.0,
            365,
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
        );
        let two_years = accrued(
            100_000.0,
            8.0,
            730,
            DepositType::Cumulative,
            CompoundingFrequency::Quarterly,
        );
        assert!(two_years > one_year);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Deposit-taking wrapper
// ═══════════════════════════════════════════════════════════════════

mod wrapper {
    use super::*;

    fn sample_deposit(days_before: u64) -> FixedDeposit {
        FixedDeposit::from_terms(
            DepositTerms {
                organization_name: "State Bank".into(),
                investment_amount: 100_000.0,
                annual_rate: 8.0,
                start_date: start_days_before(days_before),
                tenure_years: 1,
                tenure_months: 0,
                tenure_days: 0,
                deposit_type: DepositType::Cumulative,
                compounding_frequency: CompoundingFrequency::Quarterly,
            },
            Utc::now(),
        )
    }

    #[test]
    fn current_return_matches_raw_computation() {
        let service = AccrualService::new();
        let deposit = sample_deposit(365);
        assert_eq!(service.current_return(&deposit, as_of()), 8243);
    }

    #[test]
    fn maturity_of_uses_stored_tenure() {
        let service = AccrualService::new();
        let deposit = sample_deposit(365);
        let expected = deposit
            .start_date
            .checked_add_months(chrono::Months::new(12))
            .unwrap();
        assert_eq!(service.maturity_of(&deposit), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Maturity dates — calendar-correct, years → months → days
// ═══════════════════════════════════════════════════════════════════

mod maturity {
    use super::*;

    fn maturity(start: NaiveDate, y: u32, m: u32, days: u32) -> NaiveDate {
        AccrualService::new().maturity_date(start, y, m, days)
    }

    #[test]
    fn plain_years() {
        assert_eq!(maturity(d(2020, 6, 15), 2, 0, 0), d(2022, 6, 15));
    }

    #[test]
    fn plain_days() {
        assert_eq!(maturity(d(2020, 6, 15), 0, 0, 10), d(2020, 6, 25));
    }

    #[test]
    fn years_months_days_combined() {
        assert_eq!(maturity(d(2024, 1, 15), 1, 2, 10), d(2025, 3, 25));
    }

    #[test]
    fn month_end_clamps_in_leap_february() {
        // Jan 31 + 1 month lands on the last day of February
        assert_eq!(maturity(d(2024, 1, 31), 0, 1, 0), d(2024, 2, 29));
    }

    #[test]
    fn month_end_clamps_in_common_february() {
        assert_eq!(maturity(d(2023, 1, 31), 0, 1, 0), d(2023, 2, 28));
    }

    #[test]
    fn leap_day_start_plus_year_clamps() {
        assert_eq!(maturity(d(2024, 2, 29), 1, 0, 0), d(2025, 2, 28));
    }

    #[test]
    fn days_are_added_after_months() {
        // Jan 30 + 1 month clamps to Feb 29, then + 1 day = Mar 1.
        // Adding the day first would land on Feb 29 instead.
        assert_eq!(maturity(d(2024, 1, 30), 0, 1, 1), d(2024, 3, 1));
    }

    #[test]
    fn years_are_applied_before_months() {
        // Feb 29 + 1 year clamps to 2025-02-28, then + 1 month = Mar 28.
        // A single 13-month jump would have given Mar 29.
        assert_eq!(maturity(d(2024, 2, 29), 1, 1, 0), d(2025, 3, 28));
    }

    #[test]
    fn zero_tenure_is_identity() {
        assert_eq!(maturity(d(2024, 5, 10), 0, 0, 0), d(2024, 5, 10));
    }

    #[test]
    fn thirty_year_tenure() {
        assert_eq!(maturity(d(2020, 1, 1), 30, 0, 0), d(2050, 1, 1));
    }
}
