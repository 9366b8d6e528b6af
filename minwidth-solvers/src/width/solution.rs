/// The result of a successful width search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The accepted rectangle width, rounded half-up.
    pub width: f64,

    /// The partition count at which the tolerance was met.
    pub rects_count: u64,

    /// The accepted Riemann-sum area, rounded half-up.
    pub area: f64,
}
