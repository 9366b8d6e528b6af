//! Formula-string evaluation for the minwidth workspace.
//!
//! [`Formula`] wraps a user-entered arithmetic formula such as `x^2 / 2` and
//! evaluates it at a point by substituting the variable letter into the text
//! and handing the result to the `meval` expression parser. It implements
//! [`Integrand`], so a formula can be passed directly to the width solver.
//!
//! Substitution is textual on purpose: the variable is matched as a whole
//! token, case-insensitively, and the numeric literal is padded with spaces.
//! This keeps evaluation results identical for the same formula strings as
//! the interface this crate replaces.
//!
//! [`Integrand`]: minwidth_core::Integrand

mod error;
mod formula;
mod substitute;

pub use error::FormulaError;
pub use formula::Formula;
