// ═══════════════════════════════════════════════════════════════════
// Model Tests — LoanBreakdown, SavingsPlan, ChartArtifact
// ═══════════════════════════════════════════════════════════════════

use escrow_planner_core::models::loan::LoanBreakdown;
use escrow_planner_core::models::savings::SavingsPlan;

fn sample_plan() -> SavingsPlan {
    SavingsPlan {
        total_expenses: 12_000.0,
        current_savings: 2_000.0,
        monthly_saving_capacity: 900.0,
        remaining_amount: 10_000.0,
        remaining_months: 10,
        required_monthly_saving: 1_000.0,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  LoanBreakdown
// ═══════════════════════════════════════════════════════════════════

mod loan_breakdown {
    use super::*;

    #[test]
    fn serde_roundtrip_json() {
        let b = LoanBreakdown {
            total_expenses: 100_000.0,
            down_payment: 20_000.0,
            loan_amount: 80_000.0,
            monthly_payment: 479.64,
        };
        let json = serde_json::to_string(&b).unwrap();
        let back: LoanBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn json_field_names() {
        let b = LoanBreakdown {
            total_expenses: 1.0,
            down_payment: 0.2,
            loan_amount: 0.8,
            monthly_payment: 0.1,
        };
        let json = serde_json::to_string(&b).unwrap();
        for field in [
            "total_expenses",
            "down_payment",
            "loan_amount",
            "monthly_payment",
        ] {
            assert!(json.contains(field), "missing field {field}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SavingsPlan
// ═══════════════════════════════════════════════════════════════════

mod savings_plan {
    use super::*;

    #[test]
    fn serde_roundtrip_json() {
        let p = sample_plan();
        let json = serde_json::to_string(&p).unwrap();
        let back: SavingsPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn shortfall_when_required_exceeds_capacity() {
        let p = sample_plan();
        assert!(!p.meets_capacity());
        assert_eq!(p.capacity_shortfall(), 100.0);
    }

    #[test]
    fn no_shortfall_when_capacity_covers_required() {
        let p = SavingsPlan {
            monthly_saving_capacity: 1_500.0,
            ..sample_plan()
        };
        assert!(p.meets_capacity());
        assert_eq!(p.capacity_shortfall(), 0.0);
    }

    #[test]
    fn oversaved_plan_always_meets_capacity() {
        let p = SavingsPlan {
            remaining_amount: -3_000.0,
            required_monthly_saving: -600.0,
            ..sample_plan()
        };
        assert!(p.meets_capacity());
        assert_eq!(p.capacity_shortfall(), 0.0);
    }
}
