pub mod chart_service;
pub mod loan_service;
pub mod savings_service;
