use thiserror::Error;

/// Unified error type for the entire escrow-planner-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input validation ────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Savings plan ────────────────────────────────────────────────
    #[error("Invalid moving date. Please select a future date.")]
    InvalidMovingDate,

    #[error("Invalid moving date format: {0}")]
    InvalidDateFormat(String),

    #[error("Processing error: {0}")]
    Processing(String),

    // ── Charts / Serialization ──────────────────────────────────────
    #[error("Chart render failed: {0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// The message the web layer shows to the user for this error.
    ///
    /// Validation and moving-date errors carry messages written for the
    /// form page; everything else collapses into one generic message so
    /// internals never leak into the page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CoreError::ValidationError(msg) => msg.clone(),
            CoreError::InvalidMovingDate => self.to_string(),
            _ => "An error occurred while processing the savings plan.".to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Render(e.to_string())
    }
}

impl From<chrono::ParseError> for CoreError {
    fn from(e: chrono::ParseError) -> Self {
        CoreError::InvalidDateFormat(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
