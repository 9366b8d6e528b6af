use minwidth_core::{Integrand, Interval};

use super::Error;
use super::search::eval_checked;

/// One partition trial: the interval split into `rects_count` rectangles of
/// equal width, with the resulting under-estimated area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trial {
    /// Number of equal-width rectangles in this trial.
    pub rects_count: u64,

    /// Width of each rectangle, `interval.width() / rects_count`.
    pub rect_width: f64,

    /// Riemann-sum area using the smaller of f at each rectangle's endpoints.
    pub area: f64,
}

impl Trial {
    /// Computes the trial for the given partition count.
    ///
    /// Left points accumulate by repeated addition of the rectangle width,
    /// and the boundary comparison is inclusive with no epsilon correction,
    /// so the final rectangle is kept or dropped exactly as floating-point
    /// arithmetic dictates.
    pub(super) fn compute<F>(
        function: &F,
        interval: &Interval,
        rects_count: u64,
    ) -> Result<Self, Error>
    where
        F: Integrand,
    {
        let rect_width = interval.width() / rects_count as f64;
        let mut heights = 0.0;

        // The sweep cannot advance across a zero-width rectangle; a
        // degenerate interval contributes no heights.
        if rect_width > 0.0 {
            let mut left = interval.start();
            while left + rect_width <= interval.end() {
                let at_left = eval_checked(function, left)?;
                let at_right = eval_checked(function, left + rect_width)?;
                heights += at_left.min(at_right);
                left += rect_width;
            }
        }

        Ok(Self {
            rects_count,
            rect_width,
            area: rect_width * heights,
        })
    }
}
