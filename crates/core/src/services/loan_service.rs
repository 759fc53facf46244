use crate::models::loan::LoanBreakdown;

/// Computes loan economics: the down-payment split and the fixed monthly
/// payment that fully amortizes the financed amount.
///
/// Pure arithmetic — no I/O, no clock. Easy to test.
#[derive(Debug)]
pub struct LoanService;

impl LoanService {
    pub fn new() -> Self {
        Self
    }

    /// Standard amortization: payment = P × r × (1+r)^n / ((1+r)^n − 1).
    /// A zero-rate loan falls back to straight division, where the
    /// formula would divide by zero.
    ///
    /// Callers must ensure `total_expenses > 0` and `months ≥ 1`; the
    /// facade validates both. A down-payment percentage outside [0, 100]
    /// is accepted as-is and yields a negative or over-100% loan amount —
    /// guarding that is caller policy.
    #[must_use]
    pub fn amortize(
        &self,
        total_expenses: f64,
        down_payment_percentage: f64,
        annual_interest_rate: f64,
        months: u32,
    ) -> LoanBreakdown {
        let down_payment = total_expenses * down_payment_percentage / 100.0;
        let loan_amount = total_expenses - down_payment;
        let monthly_rate = annual_interest_rate / 12.0 / 100.0;

        let monthly_payment = if monthly_rate > 0.0 {
            let growth = (1.0 + monthly_rate).powi(months as i32);
            loan_amount * monthly_rate * growth / (growth - 1.0)
        } else {
            loan_amount / f64::from(months)
        };

        LoanBreakdown {
            total_expenses,
            down_payment,
            loan_amount,
            monthly_payment,
        }
    }
}
