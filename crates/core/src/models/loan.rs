use serde::{Deserialize, Serialize};

/// Result of a loan/escrow payment calculation.
///
/// Invariant: `down_payment + loan_amount` equals `total_expenses`
/// within floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanBreakdown {
    /// Total cost being financed
    pub total_expenses: f64,

    /// Up-front payment: total_expenses × down_payment_percentage / 100
    pub down_payment: f64,

    /// Financed principal: total_expenses − down_payment
    pub loan_amount: f64,

    /// Fixed monthly payment that fully amortizes the loan over the term
    pub monthly_payment: f64,
}
