use serde::{Deserialize, Serialize};

/// Result of a savings-plan calculation toward a moving-date target.
///
/// Invariant: `remaining_amount == total_expenses − current_savings` and
/// `remaining_months ≥ 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    /// Total expense target
    pub total_expenses: f64,

    /// Funds already saved
    pub current_savings: f64,

    /// Declared monthly saving capacity. Carried for the chart projection;
    /// deliberately not consulted when computing `required_monthly_saving`.
    pub monthly_saving_capacity: f64,

    /// total_expenses − current_savings (negative when oversaved)
    pub remaining_amount: f64,

    /// Whole calendar months until the moving date (always ≥ 1)
    pub remaining_months: u32,

    /// remaining_amount / remaining_months
    pub required_monthly_saving: f64,
}

impl SavingsPlan {
    /// Whether the declared capacity covers the required monthly saving.
    #[must_use]
    pub fn meets_capacity(&self) -> bool {
        self.required_monthly_saving <= self.monthly_saving_capacity
    }

    /// How much the required monthly saving exceeds the declared capacity.
    /// Zero when the plan fits within capacity.
    #[must_use]
    pub fn capacity_shortfall(&self) -> f64 {
        (self.required_monthly_saving - self.monthly_saving_capacity).max(0.0)
    }
}
