pub mod chart;
pub mod loan;
pub mod savings;
