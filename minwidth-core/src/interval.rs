use thiserror::Error;

/// Closed integration bounds `[start, end]`.
///
/// The invariant `end >= start`, with both bounds finite, is verified at
/// construction time and holds for the lifetime of the value. A degenerate
/// interval with `start == end` is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

/// An error returned when [`Interval`] bounds are rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    #[error("interval bound is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("interval start {start} exceeds end {end}")]
    Reversed { start: f64, end: f64 },
}

impl Interval {
    /// Creates an interval after validating its bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is NaN or infinite, or if
    /// `start > end`.
    pub fn new(start: f64, end: f64) -> Result<Self, IntervalError> {
        if !start.is_finite() {
            return Err(IntervalError::NonFinite { value: start });
        }
        if !end.is_finite() {
            return Err(IntervalError::NonFinite { value: end });
        }
        if start > end {
            return Err(IntervalError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`, which is always non-negative.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}
