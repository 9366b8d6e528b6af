use std::error::Error as StdError;

use thiserror::Error;

use minwidth_core::IntervalError;

/// Errors that can occur during the width search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid interval bounds")]
    InvalidBounds(#[from] IntervalError),

    #[error("formula evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("formula produced a non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },

    #[error("no width satisfies the tolerance at the requested precision after {rects_count} trials")]
    NoSolution { rects_count: u64 },

    #[error("search cancelled at partition trial {rects_count}")]
    Cancelled { rects_count: u64 },
}
