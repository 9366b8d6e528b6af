use std::error::Error as StdError;

use thiserror::Error;

use minwidth_solvers::width;

use crate::Field;

/// A failed request, identifying the logical input it concerns.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("{0} is empty")]
    EmptyInput(Field),

    #[error("{0} is not a valid number")]
    InvalidNumber(Field),

    #[error("interval start exceeds interval end")]
    InvalidBounds,

    #[error("a formula could not be evaluated to a finite number")]
    InvalidFunction(#[source] Box<dyn StdError + Send + Sync>),

    #[error("no width satisfies the tolerance at the requested precision")]
    NoSolution,
}

impl Failure {
    /// Returns the input fields this failure concerns, so a caller can flag
    /// exactly those inputs. Bounds failures concern both bound fields;
    /// formula and search failures concern none.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::EmptyInput(field) | Self::InvalidNumber(field) => vec![*field],
            Self::InvalidBounds => vec![Field::Start, Field::End],
            Self::InvalidFunction(_) | Self::NoSolution => Vec::new(),
        }
    }
}

impl From<width::Error> for Failure {
    fn from(error: width::Error) -> Self {
        match error {
            width::Error::InvalidBounds(_) => Self::InvalidBounds,
            width::Error::Function(source) => Self::InvalidFunction(source),
            e @ width::Error::NonFinite { .. } => Self::InvalidFunction(Box::new(e)),
            width::Error::NoSolution { .. } => Self::NoSolution,
            // Requests run without an observer, so the solver cannot be
            // cancelled; a cancellation still maps to the no-result category.
            width::Error::Cancelled { .. } => Self::NoSolution,
        }
    }
}
