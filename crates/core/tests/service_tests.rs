// ═══════════════════════════════════════════════════════════════════
// Service Tests — LoanService, SavingsService
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use escrow_planner_core::errors::CoreError;
use escrow_planner_core::services::loan_service::LoanService;
use escrow_planner_core::services::savings_service::SavingsService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  LoanService
// ═══════════════════════════════════════════════════════════════════

mod loan {
    use super::*;

    #[test]
    fn thirty_year_mortgage_sanity() {
        // 100k, 20% down, 6% annual, 30 years — the classic fixed-rate check
        let b = LoanService::new().amortize(100_000.0, 20.0, 6.0, 360);
        assert_eq!(b.down_payment, 20_000.0);
        assert_eq!(b.loan_amount, 80_000.0);
        assert!(
            (b.monthly_payment - 479.64).abs() < 0.01,
            "expected ≈479.64, got {}",
            b.monthly_payment
        );
    }

    #[test]
    fn down_payment_plus_loan_equals_total() {
        let svc = LoanService::new();
        for &(total, pct, rate, months) in &[
            (100_000.0, 20.0, 6.0, 360u32),
            (250_000.0, 5.0, 3.25, 240),
            (1_000.0, 0.0, 0.0, 12),
            (42.5, 99.9, 18.0, 6),
            (7_777.77, 33.3, 0.01, 1),
        ] {
            let b = svc.amortize(total, pct, rate, months);
            let diff = (b.down_payment + b.loan_amount - total).abs();
            assert!(
                diff <= 1e-9 * total.abs(),
                "invariant broken for total={total}: diff={diff}"
            );
        }
    }

    #[test]
    fn zero_rate_is_straight_division() {
        let b = LoanService::new().amortize(12_000.0, 0.0, 0.0, 24);
        assert_eq!(b.monthly_payment, 12_000.0 / 24.0);
    }

    #[test]
    fn zero_rate_with_down_payment() {
        let b = LoanService::new().amortize(10_000.0, 50.0, 0.0, 10);
        assert_eq!(b.loan_amount, 5_000.0);
        assert_eq!(b.monthly_payment, 500.0);
    }

    #[test]
    fn single_month_term() {
        // One payment at 12% annual: principal plus one month of interest
        let b = LoanService::new().amortize(1_000.0, 0.0, 12.0, 1);
        assert!((b.monthly_payment - 1_010.0).abs() < 1e-9);
    }

    #[test]
    fn negative_down_payment_percentage_is_accepted() {
        // Caller policy: out-of-range percentages pass through unguarded
        let b = LoanService::new().amortize(1_000.0, -10.0, 0.0, 10);
        assert_eq!(b.down_payment, -100.0);
        assert_eq!(b.loan_amount, 1_100.0);
    }

    #[test]
    fn over_100_percent_down_payment_gives_negative_loan() {
        let b = LoanService::new().amortize(1_000.0, 150.0, 0.0, 10);
        assert_eq!(b.loan_amount, -500.0);
        assert_eq!(b.monthly_payment, -50.0);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let svc = LoanService::new();
        let a = svc.amortize(123_456.78, 17.5, 4.125, 180);
        let b = svc.amortize(123_456.78, 17.5, 4.125, 180);
        assert_eq!(a, b);
        assert_eq!(a.monthly_payment.to_bits(), b.monthly_payment.to_bits());
    }

    #[test]
    fn higher_rate_means_higher_payment() {
        let svc = LoanService::new();
        let low = svc.amortize(100_000.0, 0.0, 3.0, 360);
        let high = svc.amortize(100_000.0, 0.0, 7.0, 360);
        assert!(high.monthly_payment > low.monthly_payment);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SavingsService — months_until
// ═══════════════════════════════════════════════════════════════════

mod months_until {
    use super::*;

    #[test]
    fn ten_months_ahead() {
        let svc = SavingsService::new();
        assert_eq!(svc.months_until(d(2025, 3, 15), d(2026, 1, 15)), 10);
    }

    #[test]
    fn ignores_day_of_month() {
        let svc = SavingsService::new();
        let today = d(2025, 3, 31);
        assert_eq!(svc.months_until(today, d(2025, 4, 1)), 1);
        assert_eq!(svc.months_until(today, d(2025, 4, 28)), 1);
    }

    #[test]
    fn same_month_is_zero() {
        let svc = SavingsService::new();
        assert_eq!(svc.months_until(d(2025, 3, 1), d(2025, 3, 28)), 0);
    }

    #[test]
    fn past_target_is_negative() {
        let svc = SavingsService::new();
        assert_eq!(svc.months_until(d(2025, 3, 15), d(2024, 12, 25)), -3);
    }

    #[test]
    fn year_boundary() {
        let svc = SavingsService::new();
        assert_eq!(svc.months_until(d(2025, 12, 31), d(2026, 1, 1)), 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SavingsService — build_plan
// ═══════════════════════════════════════════════════════════════════

mod build_plan {
    use super::*;

    #[test]
    fn closes_gap_over_ten_months() {
        let plan = SavingsService::new()
            .build_plan(12_000.0, 2_000.0, 900.0, "2026-01-15", d(2025, 3, 15))
            .unwrap();
        assert_eq!(plan.remaining_amount, 10_000.0);
        assert_eq!(plan.remaining_months, 10);
        assert_eq!(plan.required_monthly_saving, 1_000.0);
        assert_eq!(plan.monthly_saving_capacity, 900.0);
    }

    #[test]
    fn current_month_target_is_rejected() {
        let err = SavingsService::new()
            .build_plan(12_000.0, 2_000.0, 900.0, "2025-03-28", d(2025, 3, 1))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidMovingDate));
    }

    #[test]
    fn past_target_is_rejected() {
        let err = SavingsService::new()
            .build_plan(12_000.0, 2_000.0, 900.0, "2024-06-01", d(2025, 3, 15))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidMovingDate));
    }

    #[test]
    fn malformed_date_is_a_format_error() {
        let svc = SavingsService::new();
        for bad in ["not-a-date", "2025-13-40", "15-03-2025", "2025/06/01"] {
            let err = svc
                .build_plan(12_000.0, 2_000.0, 900.0, bad, d(2025, 3, 15))
                .unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidDateFormat(_)),
                "expected InvalidDateFormat for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn oversaved_plan_goes_negative_not_rejected() {
        let plan = SavingsService::new()
            .build_plan(5_000.0, 8_000.0, 100.0, "2025-08-01", d(2025, 3, 15))
            .unwrap();
        assert_eq!(plan.remaining_amount, -3_000.0);
        assert_eq!(plan.required_monthly_saving, -600.0);
    }

    #[test]
    fn capacity_is_not_consulted_in_required_saving() {
        // Same gap, wildly different capacities — identical required saving
        let svc = SavingsService::new();
        let today = d(2025, 3, 15);
        let tight = svc
            .build_plan(12_000.0, 2_000.0, 10.0, "2026-01-15", today)
            .unwrap();
        let loose = svc
            .build_plan(12_000.0, 2_000.0, 99_999.0, "2026-01-15", today)
            .unwrap();
        assert_eq!(tight.required_monthly_saving, loose.required_monthly_saving);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let svc = SavingsService::new();
        let today = d(2025, 3, 15);
        let a = svc
            .build_plan(12_345.67, 2_345.67, 800.0, "2026-01-15", today)
            .unwrap();
        let b = svc
            .build_plan(12_345.67, 2_345.67, 800.0, "2026-01-15", today)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.required_monthly_saving.to_bits(),
            b.required_monthly_saving.to_bits()
        );
    }

    #[test]
    fn day_of_month_does_not_change_the_plan() {
        let svc = SavingsService::new();
        let today = d(2025, 3, 15);
        let first = svc
            .build_plan(12_000.0, 2_000.0, 900.0, "2025-04-01", today)
            .unwrap();
        let late = svc
            .build_plan(12_000.0, 2_000.0, 900.0, "2025-04-28", today)
            .unwrap();
        assert_eq!(first.remaining_months, late.remaining_months);
        assert_eq!(first.required_monthly_saving, late.required_monthly_saving);
    }
}
