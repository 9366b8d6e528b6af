use minwidth_core::Integrand;

use crate::FormulaError;
use crate::substitute::substitute;

/// The variable letter used when none is given.
const DEFAULT_VARIABLE: char = 'x';

/// A user-entered arithmetic formula with a single free variable.
///
/// The formula text is kept as entered. Each evaluation substitutes the
/// variable letter with the numeric value of `x` and parses the resulting
/// arithmetic expression (`+`, `-`, `*`, `/`, `^`, parentheses, and the
/// common transcendental functions).
///
/// The result of a successful evaluation may be NaN or infinite, for example
/// `1/x` at zero. Whether that is an error depends on where the value is
/// used, so the decision is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    text: String,
    variable: char,
}

impl Formula {
    /// Creates a formula whose free variable is the letter `x`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_variable(text, DEFAULT_VARIABLE)
    }

    /// Creates a formula with a caller-chosen variable letter.
    pub fn with_variable(text: impl Into<String>, variable: char) -> Self {
        Self {
            text: text.into(),
            variable,
        }
    }

    /// Returns the formula text as entered.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the variable letter this formula is evaluated over.
    #[must_use]
    pub fn variable(&self) -> char {
        self.variable
    }

    /// Evaluates the formula at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the substituted text is not a valid arithmetic
    /// expression.
    pub fn eval_at(&self, x: f64) -> Result<f64, FormulaError> {
        let substituted = substitute(&self.text, self.variable, x);
        meval::eval_str(&substituted).map_err(|source| FormulaError::new(substituted, source))
    }
}

impl Integrand for Formula {
    type Error = FormulaError;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval_at(x)
    }
}
