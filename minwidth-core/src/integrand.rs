use std::convert::Infallible;

/// A single-variable function that can be evaluated at a point.
///
/// This is the seam between the width solver and any concrete function
/// representation: a parsed formula string, a closure, or anything else that
/// maps an `f64` to an `f64` and can fail while doing so.
///
/// The returned value is not required to be finite. Deciding what a NaN or
/// infinite value means is the caller's job, since it depends on where in the
/// search the evaluation happens.
pub trait Integrand {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`, for
    /// example because the underlying formula text fails to parse.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation for plain closures.
///
/// Lets callers and tests pass `|x| x * x` wherever an [`Integrand`] is
/// expected, with an error type that can never occur.
impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
