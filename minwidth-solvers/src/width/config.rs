/// Parameters of the width search.
///
/// The search does not constrain these values. A non-positive or NaN `sigma`
/// makes the acceptance test unsatisfiable, so the search ends in
/// [`Error::NoSolution`](super::Error::NoSolution) once the width rounds to
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Relative tolerance: a trial is accepted when
    /// `|area - exact_area| < sigma * exact_area`.
    pub sigma: f64,

    /// Fractional digits for the rounded outputs. Also sets the resolution of
    /// the width-underflow termination guard.
    pub decimal_places: u32,
}
