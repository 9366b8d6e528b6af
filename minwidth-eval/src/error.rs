use thiserror::Error;

/// An error returned when a formula string cannot be evaluated.
///
/// Carries the substituted text that was handed to the expression parser, so
/// the failure names the exact input that was rejected.
#[derive(Debug, Error)]
#[error("failed to evaluate formula {formula:?}")]
pub struct FormulaError {
    formula: String,
    #[source]
    source: meval::Error,
}

impl FormulaError {
    pub(crate) fn new(formula: String, source: meval::Error) -> Self {
        Self { formula, source }
    }

    /// Returns the formula text that failed to evaluate, after substitution.
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }
}
