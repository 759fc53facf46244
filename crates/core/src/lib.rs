pub mod errors;
pub mod models;
pub mod services;

mod render;

use chrono::{NaiveDate, Utc};

use errors::CoreError;
use models::{chart::ChartArtifact, loan::LoanBreakdown, savings::SavingsPlan};
use services::{
    chart_service::ChartService, loan_service::LoanService, savings_service::SavingsService,
};

/// Main entry point for the Escrow Planner core library.
///
/// The web layer parses form input into numbers and hands them here; the
/// facade performs the request-level validation, runs the calculators,
/// and renders the matching charts. It holds no per-request state — every
/// call is an independent, pure computation.
#[derive(Debug)]
#[must_use]
pub struct EscrowPlanner {
    loan_service: LoanService,
    savings_service: SavingsService,
    chart_service: ChartService,
}

impl EscrowPlanner {
    pub fn new() -> Self {
        Self {
            loan_service: LoanService::new(),
            savings_service: SavingsService::new(),
            chart_service: ChartService::new(),
        }
    }

    // ── Loan Calculation ────────────────────────────────────────────

    /// Validate inputs and compute the loan breakdown.
    ///
    /// Rejects non-positive `total_expenses` and zero `months`; the
    /// down-payment percentage and interest rate are accepted as-is.
    pub fn calculate_loan(
        &self,
        total_expenses: f64,
        down_payment_percentage: f64,
        annual_interest_rate: f64,
        months: u32,
    ) -> Result<LoanBreakdown, CoreError> {
        if total_expenses <= 0.0 || months == 0 {
            tracing::warn!(total_expenses, months, "loan calculation rejected");
            return Err(CoreError::ValidationError(
                "Total expenses and months must be greater than zero.".to_string(),
            ));
        }
        Ok(self.loan_service.amortize(
            total_expenses,
            down_payment_percentage,
            annual_interest_rate,
            months,
        ))
    }

    /// Loan breakdown plus its rendered pie chart — the full loan
    /// calculation page flow.
    pub fn calculate_loan_with_chart(
        &self,
        total_expenses: f64,
        down_payment_percentage: f64,
        annual_interest_rate: f64,
        months: u32,
    ) -> Result<(LoanBreakdown, ChartArtifact), CoreError> {
        let breakdown = self.calculate_loan(
            total_expenses,
            down_payment_percentage,
            annual_interest_rate,
            months,
        )?;
        let chart = self
            .chart_service
            .loan_pie_chart(breakdown.down_payment, breakdown.loan_amount);
        Ok((breakdown, chart))
    }

    // ── Savings Plan ────────────────────────────────────────────────

    /// Validate inputs and build the savings plan, measuring the horizon
    /// from today's date.
    pub fn build_savings_plan(
        &self,
        total_expenses: f64,
        current_savings: f64,
        monthly_saving_capacity: f64,
        moving_date: &str,
    ) -> Result<SavingsPlan, CoreError> {
        self.build_savings_plan_at(
            total_expenses,
            current_savings,
            monthly_saving_capacity,
            moving_date,
            Utc::now().date_naive(),
        )
    }

    /// Same as [`build_savings_plan`](Self::build_savings_plan) with the
    /// reference date injected, for deterministic callers and tests.
    pub fn build_savings_plan_at(
        &self,
        total_expenses: f64,
        current_savings: f64,
        monthly_saving_capacity: f64,
        moving_date: &str,
        today: NaiveDate,
    ) -> Result<SavingsPlan, CoreError> {
        if total_expenses <= 0.0 || monthly_saving_capacity <= 0.0 {
            tracing::warn!(
                total_expenses,
                monthly_saving_capacity,
                "savings plan rejected"
            );
            return Err(CoreError::ValidationError(
                "Total expenses and monthly saving capacity must be greater than zero.".to_string(),
            ));
        }
        if moving_date.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Moving date is required.".to_string(),
            ));
        }
        self.savings_service.build_plan(
            total_expenses,
            current_savings,
            monthly_saving_capacity,
            moving_date,
            today,
        )
    }

    /// Savings plan plus its rendered line chart — the full savings page
    /// flow. The chart is only rendered when the plan itself succeeds.
    pub fn build_savings_plan_with_chart(
        &self,
        total_expenses: f64,
        current_savings: f64,
        monthly_saving_capacity: f64,
        moving_date: &str,
    ) -> Result<(SavingsPlan, ChartArtifact), CoreError> {
        let plan = self.build_savings_plan(
            total_expenses,
            current_savings,
            monthly_saving_capacity,
            moving_date,
        )?;
        let chart = self.chart_service.savings_line_chart(
            plan.total_expenses,
            plan.current_savings,
            plan.monthly_saving_capacity,
            plan.remaining_months,
        );
        Ok((plan, chart))
    }

    // ── Chart Rendering ─────────────────────────────────────────────

    /// Render the loan pie chart for an existing breakdown.
    #[must_use]
    pub fn render_loan_chart(&self, breakdown: &LoanBreakdown) -> ChartArtifact {
        self.chart_service
            .loan_pie_chart(breakdown.down_payment, breakdown.loan_amount)
    }

    /// Render the savings line chart for an existing plan.
    #[must_use]
    pub fn render_savings_chart(&self, plan: &SavingsPlan) -> ChartArtifact {
        self.chart_service.savings_line_chart(
            plan.total_expenses,
            plan.current_savings,
            plan.monthly_saving_capacity,
            plan.remaining_months,
        )
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export a loan breakdown as pretty JSON for the page layer.
    pub fn loan_to_json(&self, breakdown: &LoanBreakdown) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(breakdown)?)
    }

    /// Export a savings plan as pretty JSON for the page layer.
    pub fn savings_plan_to_json(&self, plan: &SavingsPlan) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(plan)?)
    }
}

impl Default for EscrowPlanner {
    fn default() -> Self {
        Self::new()
    }
}
