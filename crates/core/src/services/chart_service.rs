use crate::models::chart::ChartArtifact;
use crate::render;

/// Renders calculation results into chart image artifacts.
///
/// The calculators compute the numbers — this wraps the SVG renderers
/// and tags each image with a unique artifact identity so concurrent
/// requests never clobber each other's charts.
#[derive(Debug)]
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Two-slice breakdown of the up-front payment vs the financed amount,
    /// with the down-payment slice pulled out for emphasis.
    ///
    /// Never fails for finite non-negative inputs; degenerate inputs
    /// (a zero slice, or both zero) still render a readable chart.
    #[must_use]
    pub fn loan_pie_chart(&self, down_payment: f64, loan_amount: f64) -> ChartArtifact {
        let svg = render::pie::loan_breakdown_svg(down_payment, loan_amount);
        let artifact = ChartArtifact::new("loan_pie_chart", svg);
        tracing::debug!(file_name = %artifact.file_name, "loan pie chart rendered");
        artifact
    }

    /// Cumulative-savings projection against the constant expense target:
    /// one point per month over `0..=remaining_months`, where
    /// `cumulative[i] = current_savings + monthly_saving_capacity × i`.
    /// The projection is linear — no compounding or interest.
    #[must_use]
    pub fn savings_line_chart(
        &self,
        total_expenses: f64,
        current_savings: f64,
        monthly_saving_capacity: f64,
        remaining_months: u32,
    ) -> ChartArtifact {
        let svg = render::line::savings_progress_svg(
            total_expenses,
            current_savings,
            monthly_saving_capacity,
            remaining_months,
        );
        let artifact = ChartArtifact::new("savings_line_chart", svg);
        tracing::debug!(file_name = %artifact.file_name, "savings line chart rendered");
        artifact
    }
}
