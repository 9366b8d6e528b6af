//! Solvers for the minwidth workspace.
//!
//! The [`width`] module searches for the minimal uniform rectangle width at
//! which a minimum-of-endpoints Riemann sum matches an exact definite
//! integral within a relative tolerance.

pub mod width;
