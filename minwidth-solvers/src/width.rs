//! Minimal-width Riemann-sum search.
//!
//! # Algorithm
//!
//! Given a function f, its antiderivative F, and bounds `[start, end]`, the
//! search first computes the exact area `|F(end) - F(start)|`. It then tries
//! partition counts 1, 2, 3, ... without an upper bound. Each trial splits
//! the interval into `rects_count` rectangles of equal width and sums, for
//! every rectangle, the smaller of f at its two endpoints — a deliberate
//! under-estimate in the style of a lower Riemann sum, using endpoint values
//! rather than a true infimum. A trial is accepted when its area is within
//! `sigma * exact_area` of the exact area (strict comparison); the rectangle
//! width and the trial area are then rounded half-up to the configured number
//! of decimal places and returned.
//!
//! # Termination
//!
//! The only guard against running forever is the output precision itself:
//! when a rejected trial's width rounds to `0.0` at the configured decimal
//! places, the search fails with [`Error::NoSolution`]. There is no iteration
//! cap. With `decimal_places = 0` the search can give up on the first width
//! below `0.5`; with a tolerance near zero and many decimal places, or a very
//! long interval, it can run for a very large or practically unbounded number
//! of trials. Callers own that trade-off; an [`Observer`] returning
//! [`Action::Cancel`] is the way out for interactive use.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per partition trial, before the acceptance test,
//! carrying the trial and the exact area it is compared against.

mod config;
mod error;
mod event;
mod observer;
mod solution;
mod trial;

mod search;


pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};
pub use observer::Observer;
pub use solution::Solution;
pub use trial::Trial;

use minwidth_core::Integrand;

/// Searches for the minimal rectangle width meeting the relative tolerance.
///
/// The observer receives an [`Event`] for every partition trial and can stop
/// the search with [`Action::Cancel`]. See the [module docs](self) for the
/// algorithm and its termination behavior.
///
/// # Errors
///
/// Returns an error if the bounds are non-finite or reversed, if either
/// formula fails to evaluate or produces a non-finite value, if the width
/// rounds to zero before the tolerance is met, or if the observer cancels.
pub fn search<F, G, Obs>(
    function: &F,
    primitive: &G,
    bounds: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Integrand,
    G: Integrand,
    Obs: Observer,
{
    search::run(function, primitive, bounds, config, observer)
}

/// Searches without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error if the bounds are non-finite or reversed, if either
/// formula fails to evaluate or produces a non-finite value, or if the width
/// rounds to zero before the tolerance is met.
pub fn search_unobserved<F, G>(
    function: &F,
    primitive: &G,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Integrand,
    G: Integrand,
{
    search(function, primitive, bounds, config, ())
}
