//! Core traits and types for the minwidth workspace.
//!
//! This crate defines the shared abstractions that the width solver and the
//! formula evaluator build on:
//!
//! - [`Integrand`] — a callable that evaluates a single-variable function at x
//! - [`Interval`] — validated closed bounds for a definite integral
//! - [`round_half_up`] — fixed-point decimal rounding with ties away from zero

mod integrand;
mod interval;
mod round;

pub use integrand::Integrand;
pub use interval::{Interval, IntervalError};
pub use round::round_half_up;
