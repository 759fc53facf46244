use chrono::{Datelike, NaiveDate};

use crate::errors::CoreError;
use crate::models::savings::SavingsPlan;

/// Builds a savings plan that closes the gap between current savings and
/// a moving-date expense target.
///
/// Takes `today` as a parameter instead of reading the clock, so results
/// are deterministic; the facade injects the real date.
#[derive(Debug)]
pub struct SavingsService;

impl SavingsService {
    pub fn new() -> Self {
        Self
    }

    /// Whole calendar months between `today` and `target`.
    ///
    /// Day-of-month is ignored on both sides: the distance is computed
    /// purely from the year/month difference, so the 1st and the 28th of
    /// next month are both exactly one month away. Negative when the
    /// target month is in the past.
    #[must_use]
    pub fn months_until(&self, today: NaiveDate, target: NaiveDate) -> i32 {
        (target.year() - today.year()) * 12 + (target.month() as i32 - today.month() as i32)
    }

    /// Build the plan. `moving_date` must be formatted "YYYY-MM-DD".
    ///
    /// Fails with `InvalidDateFormat` on a malformed date string and with
    /// `InvalidMovingDate` when the target is not strictly in a future
    /// calendar month. An oversaved plan (negative remaining amount) is
    /// allowed and yields a negative required monthly saving.
    pub fn build_plan(
        &self,
        total_expenses: f64,
        current_savings: f64,
        monthly_saving_capacity: f64,
        moving_date: &str,
        today: NaiveDate,
    ) -> Result<SavingsPlan, CoreError> {
        let target = NaiveDate::parse_from_str(moving_date, "%Y-%m-%d")?;

        let months = self.months_until(today, target);
        if months <= 0 {
            return Err(CoreError::InvalidMovingDate);
        }
        let remaining_months = months as u32;

        let remaining_amount = total_expenses - current_savings;
        let required_monthly_saving = remaining_amount / f64::from(remaining_months);

        tracing::debug!(remaining_months, remaining_amount, "savings plan computed");

        Ok(SavingsPlan {
            total_expenses,
            current_savings,
            monthly_saving_capacity,
            remaining_amount,
            remaining_months,
            required_monthly_saving,
        })
    }
}
